//! The API endpoints URIs.

/// The root route which redirects to the entry page.
pub const ROOT: &str = "/";
/// The page with the income, expense and investment panels.
pub const ENTRY_VIEW: &str = "/entry";
/// The page listing recorded transactions.
pub const REPORT_VIEW: &str = "/report";
/// The fragment with the filtered report table, used for live search.
pub const REPORT_ROWS: &str = "/report/rows";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for applying a single field edit to the shared draft.
pub const DRAFT_API: &str = "/api/draft";
/// The route for saving the draft as a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for removing every transaction from the ledger.
pub const RESET_LEDGER_API: &str = "/api/ledger/reset";

// These tests are here so that we know when we call `Uri::from_static` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::ENTRY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::REPORT_VIEW);
        assert_endpoint_is_valid_uri(endpoints::REPORT_ROWS);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);

        assert_endpoint_is_valid_uri(endpoints::DRAFT_API);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_API);
        assert_endpoint_is_valid_uri(endpoints::RESET_LEDGER_API);
    }
}
