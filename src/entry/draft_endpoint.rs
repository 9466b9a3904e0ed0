//! Defines the endpoint for applying a single field edit to the shared draft.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    entry::{DraftMessage, EntryState, entry_panels_content},
    timezone::local_today,
    transaction::TransactionType,
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The form fields a draft edit may carry.
///
/// The entry page sends exactly one field per edit. Empty strings are kept
/// as-is so that clearing a field clears the draft value.
#[derive(Debug, Default, Deserialize)]
pub struct DraftFieldForm {
    /// The type used by the "save all" button.
    pub type_: Option<TransactionType>,
    /// The raw amount text.
    pub amount: Option<String>,
    /// The selected category.
    pub category: Option<String>,
    /// The date formatted as `YYYY-MM-DD`.
    pub date: Option<String>,
    /// The note.
    pub note: Option<String>,
}

impl DraftFieldForm {
    /// Convert the present fields into draft messages.
    ///
    /// # Errors
    /// Returns an [Error::InvalidDraftField] if the date cannot be parsed.
    pub fn into_messages(self) -> Result<Vec<DraftMessage>, Error> {
        let mut messages = Vec::new();

        if let Some(type_) = self.type_ {
            messages.push(DraftMessage::SetType(type_));
        }

        if let Some(amount) = self.amount {
            messages.push(DraftMessage::SetAmount(amount));
        }

        if let Some(category) = self.category {
            messages.push(DraftMessage::SetCategory(category));
        }

        if let Some(date) = self.date {
            messages.push(DraftMessage::SetDate(parse_date(&date)?));
        }

        if let Some(note) = self.note {
            messages.push(DraftMessage::SetNote(note));
        }

        Ok(messages)
    }
}

fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, DATE_FORMAT)
        .map_err(|_| Error::InvalidDraftField(format!("\"{text}\" is not a valid date.")))
}

/// A route handler that applies one field edit to the draft and returns the
/// re-rendered panels.
pub async fn update_draft_endpoint(
    State(state): State<EntryState>,
    Form(form): Form<DraftFieldForm>,
) -> Response {
    let messages = match form.into_messages() {
        Ok(messages) => messages,
        Err(error) => {
            tracing::error!("could not read draft update: {error}");
            return error.into_alert_response();
        }
    };

    let Ok([message]) = <[DraftMessage; 1]>::try_from(messages) else {
        tracing::error!("draft update must contain exactly one field");
        return Error::InvalidDraftField("Change one field at a time.".to_owned())
            .into_alert_response();
    };

    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let mut draft = match state.draft.lock() {
        Ok(draft) => draft,
        Err(error) => {
            tracing::error!("could not acquire draft lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    tracing::debug!("Updating draft: {message:?}");
    draft.update(message);
    draft.refresh_date(today);

    entry_panels_content(&draft).into_response()
}
