use std::sync::{Arc, Mutex};

use axum::extract::FromRef;

use crate::{AppState, entry::Draft, ledger::Ledger};

/// The state needed by the entry page and its endpoints.
#[derive(Debug, Clone)]
pub struct EntryState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Bangkok".
    pub local_timezone: String,
    /// The draft shared by the three panels.
    pub draft: Arc<Mutex<Draft>>,
    /// Where saved transactions go.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for EntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            draft: state.draft.clone(),
            ledger: state.ledger.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_entry_state() -> EntryState {
    use time::OffsetDateTime;

    EntryState {
        local_timezone: "Etc/UTC".to_owned(),
        draft: Arc::new(Mutex::new(Draft::new(OffsetDateTime::now_utc().date()))),
        ledger: Arc::new(Mutex::new(Ledger::new())),
    }
}
