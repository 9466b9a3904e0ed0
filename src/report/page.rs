//! The report page: every recorded transaction in a searchable table.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_DELETE_STYLE, CURRENCY_SYMBOL, FORM_TEXT_INPUT_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_amount,
    },
    ledger::Ledger,
    navigation::NavBar,
    report::{filter_transactions, format_report_date},
    transaction::{Transaction, TransactionType},
};

/// The state needed for the report page.
#[derive(Debug, Clone)]
pub struct ReportState {
    /// The recorded transactions.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for ReportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// The query parameters of the report page and its rows fragment.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// The search text, matched against category, note, type and date.
    pub q: Option<String>,
}

fn type_badge_style(type_: TransactionType) -> &'static str {
    match type_ {
        TransactionType::Income => {
            "px-2 py-0.5 rounded-full text-xs font-medium capitalize \
            bg-emerald-100 text-emerald-800 dark:bg-emerald-900/30 dark:text-emerald-300"
        }
        TransactionType::Expense => {
            "px-2 py-0.5 rounded-full text-xs font-medium capitalize \
            bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-300"
        }
        TransactionType::Invest => {
            "px-2 py-0.5 rounded-full text-xs font-medium capitalize \
            bg-blue-100 text-blue-800 dark:bg-blue-900/30 dark:text-blue-300"
        }
    }
}

fn table_row(transaction: &Transaction) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (format_report_date(transaction.date)) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(type_badge_style(transaction.type_)) { (transaction.type_.as_str()) }
            }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class={ (TABLE_CELL_STYLE) " text-right tabular-nums" }
            {
                (format_amount(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                @if transaction.note.is_empty() {
                    "-"
                } @else {
                    (transaction.note)
                }
            }
        }
    }
}

/// The record count and the table, swapped as one unit by the live search.
fn report_results_view(transactions: &[&Transaction], total_count: usize) -> Markup {
    html! {
        div id="report-results" class="space-y-2"
        {
            p class="text-sm text-gray-500 dark:text-neutral-400"
            {
                "Showing " (transactions.len()) " of " (total_count) " records"
            }

            div class="overflow-x-auto rounded-lg border border-gray-200 dark:border-neutral-800"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-neutral-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class={ (TABLE_CELL_STYLE) " text-right" }
                            {
                                "Amount (" (CURRENCY_SYMBOL) ")"
                            }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Note" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            (table_row(transaction))
                        }

                        @if transactions.is_empty() {
                            tr
                            {
                                td
                                    colspan="5"
                                    class="px-6 py-4 text-center text-gray-500 dark:text-neutral-400"
                                {
                                    "No records found"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn report_view(transactions: &[&Transaction], total_count: usize, query: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::REPORT_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4"
            {
                header class="flex justify-between flex-wrap items-end gap-4"
                {
                    div class="flex flex-col gap-1"
                    {
                        h1 class="text-3xl font-semibold" { "Financial report" }
                        p class="text-sm text-gray-500 dark:text-neutral-400"
                        {
                            "Every income, expense and investment you have recorded."
                        }
                    }

                    div class="flex items-center gap-4"
                    {
                        a href=(endpoints::ENTRY_VIEW) class=(LINK_STYLE) { "Record more" }

                        @if total_count > 0 {
                            button
                                type="button"
                                hx-post=(endpoints::RESET_LEDGER_API)
                                hx-confirm="Are you sure you want to delete every record? This cannot be undone."
                                hx-target-error="#alert-container"
                                class=(BUTTON_DELETE_STYLE)
                            {
                                "Clear all"
                            }
                        }
                    }
                }

                div class="relative max-w-md"
                {
                    span
                        class="material-symbols-outlined absolute left-3 top-1/2 -translate-y-1/2 text-gray-400"
                    {
                        "search"
                    }

                    input
                        type="search"
                        name="q"
                        value=(query)
                        placeholder="Search category, note, type or date"
                        aria-label="Search records"
                        hx-get=(endpoints::REPORT_ROWS)
                        hx-trigger="input changed delay:300ms, search"
                        hx-target="#report-results"
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                        class={ (FORM_TEXT_INPUT_STYLE) " pl-10" };
                }

                (report_results_view(transactions, total_count))
            }
        }
    };

    base("Report", &[], &content)
}

fn snapshot(state: &ReportState) -> Result<Vec<Transaction>, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::StateLockError)?;

    Ok(ledger.transactions().to_vec())
}

/// Renders the report page, filtered by the optional `q` query parameter.
pub async fn get_report_page(
    State(state): State<ReportState>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, Error> {
    let transactions = snapshot(&state)?;
    let query = query.q.unwrap_or_default();
    let filtered = filter_transactions(&transactions, &query);

    Ok(report_view(&filtered, transactions.len(), &query).into_response())
}

/// Renders only the record count and table for the live search.
pub async fn get_report_rows(
    State(state): State<ReportState>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, Error> {
    let transactions = snapshot(&state)?;
    let query = query.q.unwrap_or_default();
    let filtered = filter_transactions(&transactions, &query);

    Ok(report_results_view(&filtered, transactions.len()).into_response())
}
