//! Alert system for displaying success and error messages to users.
//!
//! Alerts are non-blocking: they are swapped into the page's alert container
//! and can be dismissed by the user.

use maud::{Markup, html};

/// A message to show in the alert container.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success { message: String, details: String },
    Error { message: String, details: String },
}

impl Alert {
    /// Create a success alert.
    pub fn success(message: &str, details: &str) -> Self {
        Alert::Success {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Alert::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    pub fn into_html(self) -> Markup {
        let (message, details, container_style, icon) = match self {
            Alert::Success { message, details } => (
                message,
                details,
                "flex items-start gap-3 p-4 mb-4 rounded-lg border \
                text-emerald-800 bg-emerald-50 border-emerald-300 \
                dark:bg-neutral-900 dark:text-emerald-400 dark:border-emerald-800",
                "check_circle",
            ),
            Alert::Error { message, details } => (
                message,
                details,
                "flex items-start gap-3 p-4 mb-4 rounded-lg border \
                text-red-800 bg-red-50 border-red-300 \
                dark:bg-neutral-900 dark:text-red-400 dark:border-red-800",
                "error",
            ),
        };

        html! {
            div role="alert" class=(container_style)
            {
                span class="material-symbols-outlined" { (icon) }

                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="text-sm" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="text-sm font-semibold"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    fn render(alert: Alert) -> Html {
        Html::parse_fragment(&alert.into_html().into_string())
    }

    #[test]
    fn renders_message_and_details() {
        let html = render(Alert::success("Saved", "Your transaction was recorded."));

        let text = html
            .select(&Selector::parse("[role=alert]").unwrap())
            .next()
            .expect("alert missing")
            .text()
            .collect::<String>();

        assert!(text.contains("Saved"), "got {text:?}");
        assert!(text.contains("Your transaction was recorded."), "got {text:?}");
    }

    #[test]
    fn omits_empty_details() {
        let html = render(Alert::error("Something went wrong", ""));

        let paragraphs = html.select(&Selector::parse("p").unwrap()).count();

        assert_eq!(paragraphs, 1, "want only the message paragraph");
    }
}
