use scraper::{Html, Selector};

/// Assert that `html` contains exactly one alert and that its headline is `expected_message`.
#[track_caller]
pub(crate) fn assert_alert_message(html: &Html, expected_message: &str) {
    let alerts = html
        .select(&Selector::parse("[role=alert]").unwrap())
        .collect::<Vec<_>>();
    assert_eq!(alerts.len(), 1, "want 1 alert, got {}", alerts.len());

    let message = alerts[0]
        .select(&Selector::parse("p.font-medium").unwrap())
        .next()
        .expect("No alert message found")
        .text()
        .collect::<String>();

    assert_eq!(message.trim(), expected_message);
}

#[track_caller]
pub(crate) fn assert_no_alert(html: &Html) {
    let alert_count = html
        .select(&Selector::parse("[role=alert]").unwrap())
        .count();

    assert_eq!(alert_count, 0, "want no alerts, got {alert_count}");
}
