//! Defines the endpoint for removing every transaction from the ledger.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{Error, endpoints, report::ReportState};

/// A route handler that clears the ledger and redirects back to the report.
pub async fn reset_ledger_endpoint(State(state): State<ReportState>) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    ledger.clear();

    (
        HxRedirect(endpoints::REPORT_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use time::macros::date;

    use crate::{
        endpoints,
        ledger::Ledger,
        report::ReportState,
        test_utils::assert_hx_redirect,
        transaction::{Transaction, TransactionType},
    };

    use super::reset_ledger_endpoint;

    #[tokio::test]
    async fn clears_ledger_and_redirects_to_report() {
        let mut ledger = Ledger::new();
        ledger.add(
            Transaction::build(TransactionType::Expense, 9.5, "Food", date!(2024 - 05 - 01))
                .finalize(),
        );
        let state = ReportState {
            ledger: Arc::new(Mutex::new(ledger)),
        };

        let response = reset_ledger_endpoint(State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::REPORT_VIEW);
        assert!(state.ledger.lock().unwrap().is_empty());
    }
}
