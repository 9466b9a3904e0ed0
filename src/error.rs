//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, entry::DraftError, internal_server_error::InternalServerError,
    not_found::NotFoundError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The draft could not be saved as a transaction.
    #[error(transparent)]
    Draft(#[from] DraftError),

    /// A draft update did not contain exactly one valid field.
    ///
    /// The string describes what was wrong with the update.
    #[error("invalid draft update: {0}")]
    InvalidDraftField(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the lock on the shared ledger or draft.
    #[error("could not acquire the state lock")]
    StateLockError,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StateLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::Draft(DraftError::MissingAmount) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Please fill in amount and category",
                    "Enter an amount before saving.",
                ),
            ),
            Error::Draft(DraftError::MissingCategory) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Please fill in amount and category",
                    "Select a category before saving.",
                ),
            ),
            Error::Draft(DraftError::InvalidAmount(amount)) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid amount",
                    &format!("\"{amount}\" is not a number. Enter an amount such as 150.50."),
                ),
            ),
            Error::InvalidDraftField(reason) => (
                StatusCode::BAD_REQUEST,
                Alert::error("Could not update the form", &reason),
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Invalid Timezone Settings",
                    &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                ),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                ),
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::entry::DraftError;

    use super::Error;

    #[test]
    fn draft_errors_are_bad_requests() {
        let errors = [
            Error::Draft(DraftError::MissingAmount),
            Error::Draft(DraftError::MissingCategory),
            Error::Draft(DraftError::InvalidAmount("abc".to_owned())),
            Error::InvalidDraftField("no field".to_owned()),
        ];

        for error in errors {
            let response = error.into_alert_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn lock_error_is_internal_server_error() {
        assert_eq!(
            Error::StateLockError.into_alert_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::StateLockError.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_renders_404() {
        assert_eq!(Error::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
