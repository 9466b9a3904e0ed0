//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    entry::{create_transaction_endpoint, get_entry_page, update_draft_endpoint},
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    report::{get_report_page, get_report_rows, reset_ledger_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::ENTRY_VIEW, get(get_entry_page))
        .route(endpoints::REPORT_VIEW, get(get_report_page))
        .route(endpoints::REPORT_ROWS, get(get_report_rows))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::DRAFT_API, post(update_draft_endpoint))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::RESET_LEDGER_API, post(reset_ledger_endpoint));

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the entry page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::ENTRY_VIEW)
}
