//! Filtering the report table by a free-text query.

use time::Date;

use crate::transaction::Transaction;

/// Prepare raw query text for matching: surrounding whitespace is ignored
/// and matching is case-insensitive.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Format `date` the way the report table shows it, e.g. "1/15/2024".
pub fn format_report_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

/// Whether `transaction` matches an already normalized query.
///
/// The query matches when it is empty or is a substring of the lowercased
/// category, note, type name or report date.
pub fn matches(transaction: &Transaction, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }

    transaction
        .category
        .to_lowercase()
        .contains(normalized_query)
        || transaction.note.to_lowercase().contains(normalized_query)
        || transaction.type_.as_str().contains(normalized_query)
        || format_report_date(transaction.date).contains(normalized_query)
}

/// The transactions matching `query`, in their original order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    query: &str,
) -> Vec<&'a Transaction> {
    let query = normalize_query(query);

    transactions
        .iter()
        .filter(|transaction| matches(transaction, &query))
        .collect()
}
