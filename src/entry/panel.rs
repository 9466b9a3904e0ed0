//! The income, expense and investment panels.
//!
//! The three panels are the same form with different labels, colours and
//! category lists. Each one renders the shared [Draft], so a value typed into
//! one panel shows up in the other two after the next swap.

use maud::{Markup, html};

use crate::{
    endpoints,
    entry::Draft,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, FORM_TEXTAREA_STYLE},
    transaction::TransactionType,
    vocabulary::categories_for,
};

/// The accent colour of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[allow(missing_docs)]
    Green,
    #[allow(missing_docs)]
    Red,
    #[allow(missing_docs)]
    Blue,
}

impl Theme {
    fn icon_style(self) -> &'static str {
        match self {
            Theme::Green => "p-2 rounded-lg bg-emerald-50 text-emerald-500 dark:bg-neutral-800",
            Theme::Red => "p-2 rounded-lg bg-red-50 text-red-500 dark:bg-neutral-800",
            Theme::Blue => "p-2 rounded-lg bg-blue-50 text-blue-500 dark:bg-neutral-800",
        }
    }

    fn button_style(self) -> &'static str {
        match self {
            Theme::Green => {
                "mt-auto flex items-center justify-center gap-2 w-full py-2.5 px-4 \
                rounded-lg border border-dashed text-sm font-semibold \
                border-emerald-500 text-emerald-500 hover:bg-emerald-500/10"
            }
            Theme::Red => {
                "mt-auto flex items-center justify-center gap-2 w-full py-2.5 px-4 \
                rounded-lg border border-dashed text-sm font-semibold \
                border-red-500 text-red-500 hover:bg-red-500/10"
            }
            Theme::Blue => {
                "mt-auto flex items-center justify-center gap-2 w-full py-2.5 px-4 \
                rounded-lg border border-dashed text-sm font-semibold \
                border-blue-500 text-blue-500 hover:bg-blue-500/10"
            }
        }
    }
}

/// The labels and colours of one entry panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    /// The type given to transactions saved with this panel's button.
    pub type_: TransactionType,
    /// The heading, e.g. "Income".
    pub title: &'static str,
    /// Shown in brackets after the title.
    pub subtitle: &'static str,
    /// A Material Symbols icon name.
    pub icon: &'static str,
    /// Colours the icon and the save button.
    pub theme: Theme,
    /// The text of the panel's save button.
    pub button_label: &'static str,
}

/// The panels in the order they appear on the entry page.
pub const PANELS: [Panel; 3] = [
    Panel {
        type_: TransactionType::Income,
        title: "Income",
        subtitle: "Money in",
        icon: "trending_up",
        theme: Theme::Green,
        button_label: "Add income",
    },
    Panel {
        type_: TransactionType::Expense,
        title: "Expenses",
        subtitle: "Money out",
        icon: "trending_down",
        theme: Theme::Red,
        button_label: "Add expense",
    },
    Panel {
        type_: TransactionType::Invest,
        title: "Investment",
        subtitle: "Savings and assets",
        icon: "monitoring",
        theme: Theme::Blue,
        button_label: "Save investment",
    },
];

/// Render one panel as a form filled in with the values of `draft`.
///
/// Every field posts its own value to the draft endpoint when it changes and
/// the form posts all of its fields when saved. Requests target the
/// `#entry-panels` container, which is declared on the enclosing page.
pub fn panel_view(panel: &Panel, draft: &Draft) -> Markup {
    let field_id = |field: &str| format!("{}-{field}", panel.type_);
    let categories = categories_for(panel.type_);
    let has_category = categories.contains(&draft.category.as_str());

    html! {
        form
            id=(field_id("form"))
            hx-post=(endpoints::TRANSACTIONS_API)
            class="flex flex-col gap-6 p-6 rounded-lg border border-gray-200 bg-white \
                dark:bg-neutral-900 dark:border-neutral-800"
        {
            input type="hidden" name="panel" value=(panel.type_.as_str());

            div class="flex items-center gap-3 pb-4 border-b border-gray-200 dark:border-neutral-800"
            {
                div class=(panel.theme.icon_style())
                {
                    span class="material-symbols-outlined" { (panel.icon) }
                }

                h3 class="text-xl font-semibold text-gray-900 dark:text-white"
                {
                    (panel.title)
                    span class="ml-1 text-sm font-medium text-gray-500 dark:text-neutral-500"
                    {
                        " (" (panel.subtitle) ")"
                    }
                }
            }

            div class="space-y-4"
            {
                div class="space-y-2"
                {
                    label for=(field_id("amount")) class=(FORM_LABEL_STYLE) { "Amount" }

                    div class="input-wrapper"
                    {
                        input
                            id=(field_id("amount"))
                            name="amount"
                            type="text"
                            inputmode="decimal"
                            autocomplete="off"
                            placeholder="0.00"
                            value=(draft.amount)
                            hx-post=(endpoints::DRAFT_API)
                            hx-trigger="change"
                            hx-params="amount"
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div class="space-y-2"
                {
                    label for=(field_id("category")) class=(FORM_LABEL_STYLE) { "Category" }

                    select
                        id=(field_id("category"))
                        name="category"
                        hx-post=(endpoints::DRAFT_API)
                        hx-trigger="change"
                        hx-params="category"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="" disabled selected[!has_category] { "Select a category" }

                        @for category in categories {
                            option value=(category) selected[*category == draft.category] { (category) }
                        }
                    }
                }

                div class="space-y-2"
                {
                    label for=(field_id("date")) class=(FORM_LABEL_STYLE) { "Date" }

                    input
                        id=(field_id("date"))
                        name="date"
                        type="date"
                        value=(draft.date.to_string())
                        hx-post=(endpoints::DRAFT_API)
                        hx-trigger="change"
                        hx-params="date"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div class="space-y-2"
                {
                    label for=(field_id("note")) class=(FORM_LABEL_STYLE) { "Note" }

                    textarea
                        id=(field_id("note"))
                        name="note"
                        placeholder="Additional details..."
                        hx-post=(endpoints::DRAFT_API)
                        hx-trigger="change"
                        hx-params="note"
                        class=(FORM_TEXTAREA_STYLE)
                    {
                        (draft.note)
                    }
                }
            }

            button type="submit" class=(panel.theme.button_style())
            {
                span class="material-symbols-outlined text-[18px]" { "add_circle" }
                (panel.button_label)
            }
        }
    }
}
