//! Defines the endpoint for saving the draft as a transaction.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::html;
use serde::Deserialize;

use crate::{
    Error,
    alert::Alert,
    entry::{DraftFieldForm, EntryState, SaveAction, entry_panels_content},
    html::{CURRENCY_SYMBOL, alert_container, format_amount},
    timezone::local_today,
    transaction::TransactionType,
};

/// The form data sent by a panel's save button or the "save all" button.
#[derive(Debug, Default, Deserialize)]
pub struct SaveForm {
    /// The panel whose button was pressed, absent for "save all".
    pub panel: Option<TransactionType>,
    /// The raw amount text shown in the panel.
    pub amount: Option<String>,
    /// The category selected in the panel.
    pub category: Option<String>,
    /// The date formatted as `YYYY-MM-DD`.
    pub date: Option<String>,
    /// The note shown in the panel.
    pub note: Option<String>,
}

impl SaveForm {
    fn action(&self) -> SaveAction {
        self.panel.map_or(SaveAction::All, SaveAction::Panel)
    }

    fn into_draft_fields(self) -> DraftFieldForm {
        DraftFieldForm {
            type_: None,
            amount: self.amount,
            category: self.category,
            date: self.date,
            note: self.note,
        }
    }
}

/// A route handler for saving the draft.
///
/// Any fields sent with the form are applied to the draft first so that the
/// values on screen are the ones saved. On success the ledger gets the new
/// transaction, the draft is reset and the response holds the re-rendered
/// panels and a success alert. On failure the draft keeps its values and the
/// response is an error alert.
pub async fn create_transaction_endpoint(
    State(state): State<EntryState>,
    Form(form): Form<SaveForm>,
) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let action = form.action();
    let messages = match form.into_draft_fields().into_messages() {
        Ok(messages) => messages,
        Err(error) => {
            tracing::error!("could not read transaction form: {error}");
            return error.into_alert_response();
        }
    };

    let mut draft = match state.draft.lock() {
        Ok(draft) => draft,
        Err(error) => {
            tracing::error!("could not acquire draft lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    for message in messages {
        draft.update(message);
    }

    let transaction = match draft.submit(action, today, |transaction| ledger.add(transaction)) {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::error!("could not save draft: {error}");
            return Error::from(error).into_alert_response();
        }
    };

    let details = format!(
        "Recorded {} of {CURRENCY_SYMBOL}{} in {}.",
        transaction.type_,
        format_amount(transaction.amount),
        transaction.category
    );
    let alert = Alert::success("Data saved successfully!", &details);

    html! {
        (entry_panels_content(&draft))
        (alert_container(Some(alert.into_html())))
    }
    .into_response()
}
