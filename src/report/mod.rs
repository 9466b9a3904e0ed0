//! The report of every recorded transaction.
//!
//! This module contains the query filter used by the live search, the report
//! page and its rows fragment, and the endpoint that clears the ledger.

mod filter;
mod page;
mod reset_endpoint;

pub use filter::{filter_transactions, format_report_date, matches, normalize_query};
pub use page::{ReportState, get_report_page, get_report_rows};
pub use reset_endpoint::reset_ledger_endpoint;
