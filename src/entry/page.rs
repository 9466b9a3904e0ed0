//! The entry page: three panels sharing one draft plus a "save all" button.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    entry::{Draft, EntryState, PANELS, panel_view},
    html::{
        BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, base, currency_input_styles, loading_spinner,
    },
    navigation::NavBar,
    timezone::local_today,
};

/// Every request on the page is queued behind this element so that a field's
/// change request always lands before a save request.
const SYNC_TARGET: &str = "#entry-page:queue all";

/// The panels without their container, used as the body of htmx responses
/// that swap into `#entry-panels`.
pub fn entry_panels_content(draft: &Draft) -> Markup {
    html! {
        @for panel in &PANELS {
            (panel_view(panel, draft))
        }
    }
}

fn entry_panels_view(draft: &Draft) -> Markup {
    html! {
        div
            id="entry-panels"
            class="grid grid-cols-1 lg:grid-cols-3 gap-6 xl:gap-8 items-start"
        {
            (entry_panels_content(draft))
        }
    }
}

fn entry_view(draft: &Draft) -> Markup {
    let nav_bar = NavBar::new(endpoints::ENTRY_VIEW).into_html();
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div
                id="entry-page"
                hx-target="#entry-panels"
                hx-target-error="#alert-container"
                hx-sync=(SYNC_TARGET)
                class="flex flex-col gap-8"
            {
                div class="flex flex-col gap-1"
                {
                    h1 class="text-3xl font-semibold text-gray-900 dark:text-white"
                    {
                        "Record your finances"
                    }

                    p class="text-sm text-gray-500 dark:text-neutral-400"
                    {
                        "Enter income, expenses and investments to keep your report accurate."
                    }
                }

                (entry_panels_view(draft))

                div class="sticky bottom-24 lg:bottom-4 z-30 mt-4 flex justify-center w-full"
                {
                    button
                        type="button"
                        id="save-all"
                        hx-post=(endpoints::TRANSACTIONS_API)
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        span
                            id="indicator"
                            class="inline htmx-indicator"
                        {
                            (spinner)
                        }
                        span class="material-symbols-outlined" { "save" }
                        "Save all"
                    }
                }
            }
        }
    };

    base("Record", &[currency_input_styles()], &content)
}

/// Renders the entry page with the current draft.
///
/// A date the user has not picked is shown as today in the configured timezone.
pub async fn get_entry_page(State(state): State<EntryState>) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    let draft = {
        let mut draft = state
            .draft
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire draft lock: {error}"))
            .map_err(|_| Error::StateLockError)?;
        draft.refresh_date(today);
        draft.clone()
    };

    Ok(entry_view(&draft).into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use scraper::{Html, Selector};
    use time::{OffsetDateTime, macros::date};

    use crate::{
        endpoints,
        entry::{Draft, DraftMessage, state::test_entry_state},
        test_utils::{
            assert_content_type, assert_hx_endpoint, assert_status_ok, assert_valid_html,
            must_get_forms, parse_html_document,
        },
    };

    use super::get_entry_page;

    #[tokio::test]
    async fn entry_page_has_three_panels() {
        let state = test_entry_state();

        let response = get_entry_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        must_get_forms(&document, 3);
    }

    #[tokio::test]
    async fn entry_page_targets_panel_container() {
        let state = test_entry_state();

        let response = get_entry_page(State(state)).await.unwrap();

        let document = parse_html_document(response).await;
        let page = document
            .select(&Selector::parse("#entry-page").unwrap())
            .next()
            .expect("No entry page container found");
        assert_eq!(page.value().attr("hx-target"), Some("#entry-panels"));
        assert_eq!(page.value().attr("hx-target-error"), Some("#alert-container"));
        let panels = document
            .select(&Selector::parse("#entry-panels").unwrap())
            .count();
        assert_eq!(panels, 1);
    }

    #[tokio::test]
    async fn save_all_button_posts_without_panel() {
        let state = test_entry_state();

        let response = get_entry_page(State(state)).await.unwrap();

        let document = parse_html_document(response).await;
        let button = document
            .select(&Selector::parse("#save-all").unwrap())
            .next()
            .expect("No save all button found");
        assert_hx_endpoint(&button, endpoints::TRANSACTIONS_API, "hx-post");
        assert!(
            button.ancestors().all(|node| node
                .value()
                .as_element()
                .is_none_or(|element| element.name() != "form")),
            "save all button must not be inside a panel form"
        );
    }

    #[tokio::test]
    async fn entry_page_renders_current_draft() {
        let state = test_entry_state();
        state
            .draft
            .lock()
            .unwrap()
            .update(DraftMessage::SetAmount("42".to_owned()));

        let response = get_entry_page(State(state)).await.unwrap();

        let document = parse_html_document(response).await;
        let amounts: Vec<_> = document
            .select(&Selector::parse("input[name=amount]").unwrap())
            .map(|input| input.value().attr("value").unwrap_or_default().to_owned())
            .collect();
        assert_eq!(amounts, vec!["42", "42", "42"]);
    }

    fn date_values(document: &Html) -> Vec<String> {
        document
            .select(&Selector::parse("input[name=date]").unwrap())
            .map(|input| input.value().attr("value").unwrap_or_default().to_owned())
            .collect()
    }

    #[tokio::test]
    async fn default_date_from_earlier_day_shows_today() {
        let state = test_entry_state();
        let today = OffsetDateTime::now_utc().date();
        let yesterday = today.previous_day().unwrap();
        *state.draft.lock().unwrap() = Draft::new(yesterday);

        let response = get_entry_page(State(state.clone())).await.unwrap();

        let document = parse_html_document(response).await;
        assert_eq!(date_values(&document), vec![today.to_string(); 3]);
        assert_eq!(state.draft.lock().unwrap().date, today);
    }

    #[tokio::test]
    async fn picked_date_is_shown_unchanged() {
        let state = test_entry_state();
        state
            .draft
            .lock()
            .unwrap()
            .update(DraftMessage::SetDate(date!(2024 - 01 - 15)));

        let response = get_entry_page(State(state)).await.unwrap();

        let document = parse_html_document(response).await;
        assert_eq!(date_values(&document), vec!["2024-01-15"; 3]);
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let mut state = test_entry_state();
        state.local_timezone = "Not/AZone".to_owned();

        let result = get_entry_page(State(state)).await;

        assert!(result.is_err());
    }
}
