use maud::{DOCTYPE, Markup, PreEscaped, html};

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "flex items-center justify-center gap-3 \
    h-12 min-w-[280px] px-8 bg-emerald-600 hover:bg-emerald-700 text-white \
    text-base font-bold rounded-lg shadow-lg transition-all";

pub const BUTTON_DELETE_STYLE: &str = "px-3 py-2 text-sm font-medium text-red-600 \
    hover:text-red-500 dark:text-red-500 dark:hover:text-red-400 underline \
    bg-transparent border-none cursor-pointer";

// Form styles
pub const FORM_LABEL_STYLE: &str =
    "block mb-2 text-sm font-medium text-gray-900 dark:text-neutral-300";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full h-10 px-3 rounded-lg text-sm \
    text-gray-900 dark:text-white bg-gray-50 dark:bg-neutral-800 \
    border border-gray-300 dark:border-neutral-700 \
    dark:placeholder-neutral-600 focus:ring-1 focus:ring-emerald-500 \
    focus:border-emerald-500";
pub const FORM_TEXTAREA_STYLE: &str = "block w-full h-20 p-3 resize-none rounded-lg \
    text-sm text-gray-900 dark:text-white bg-gray-50 dark:bg-neutral-800 \
    border border-gray-300 dark:border-neutral-700 dark:placeholder-neutral-600 \
    focus:ring-1 focus:ring-emerald-500 focus:border-emerald-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-neutral-900 dark:text-neutral-400";

pub const TABLE_ROW_STYLE: &str = "border-t border-gray-100 dark:border-neutral-800";

pub const TABLE_CELL_STYLE: &str = "px-4 py-3 align-top text-gray-700 dark:text-neutral-300";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "max-w-[1440px] mx-auto px-4 sm:px-6 lg:px-8 py-8 text-gray-900 dark:text-white";

/// The symbol shown in front of amounts.
pub const CURRENCY_SYMBOL: &str = "฿";

pub enum HeadElement {
    Style(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Ledgerlet" }
                link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined";

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/dist/response-targets.js" {}

                style
                {
                    r#"
                    #indicator.htmx-indicator {
                        display: none;
                    }

                    #indicator.htmx-request .htmx-indicator {
                        display: inline;
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::Style(text) => style { (text) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-white dark:bg-black pb-[calc(5rem+env(safe-area-inset-bottom))] lg:pb-0"
            {
                (content)

                (alert_container(None))
            }
        }
    }
}

/// The fixed container that alerts are swapped into.
///
/// Pass `Some(alert)` to render an out-of-band swap that replaces the
/// container on the current page.
pub fn alert_container(alert: Option<Markup>) -> Markup {
    html! {
        div
            id="alert-container"
            hx-swap-oob=[alert.as_ref().map(|_| "true")]
            class="w-full max-w-md px-4"
            style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
        {
            @if let Some(alert) = alert {
                (alert)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-black"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-emerald-600 dark:text-emerald-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-emerald-600
                            hover:bg-emerald-800 focus:ring-4 focus:outline-hidden
                            focus:ring-emerald-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-emerald-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// An animated spinner shown inside buttons while an htmx request is in flight.
pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Returns the CSS styles for adding a currency prefix to amount inputs.
pub fn currency_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(format!(
        r#"
        .input-wrapper {{
            position: relative;
        }}
        .input-wrapper input {{
            padding-left: 2rem;
        }}
        .input-wrapper::before {{
            content: '{CURRENCY_SYMBOL}';
            position: absolute;
            left: 1rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
            color: #737373;
        }}
        "#
    )))
}

/// Format `number` with thousands separators and at most two decimal places,
/// dropping trailing zeros, e.g. `1234.5` becomes "1,234.5".
///
/// The value is rounded to cents before grouping, so `999.999` becomes "1,000".
pub fn format_amount(number: f64) -> String {
    let rounded = format!("{:.2}", number.abs());
    let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut formatted = group_thousands(integer);
    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    // Values that round to zero, such as -0.001, are shown without a sign.
    if number < 0.0 && formatted != "0" {
        format!("-{formatted}")
    } else {
        formatted
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
