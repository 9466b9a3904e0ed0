//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::{Error, entry::Draft, ledger::Ledger, timezone::local_today};

/// The state of the server.
///
/// The server owns the canonical list of transactions and the single draft
/// shared by the entry panels.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Bangkok".
    pub local_timezone: String,

    /// Every recorded transaction, in insertion order.
    pub ledger: Arc<Mutex<Ledger>>,

    /// The in-progress entry form values.
    pub draft: Arc<Mutex<Draft>>,
}

impl AppState {
    /// Create a new [AppState] with an empty ledger and a draft dated today.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Bangkok".
    ///
    /// # Errors
    /// Returns an [Error::InvalidTimezoneError] if `local_timezone` is not a valid timezone.
    pub fn new(local_timezone: &str) -> Result<Self, Error> {
        let today = local_today(local_timezone)?;

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            ledger: Arc::new(Mutex::new(Ledger::new())),
            draft: Arc::new(Mutex::new(Draft::new(today))),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::AppState;

    #[test]
    fn new_state_starts_empty() {
        let state = AppState::new("Etc/UTC").expect("valid timezone");

        assert!(state.ledger.lock().unwrap().is_empty());
        assert_eq!(state.draft.lock().unwrap().amount, "");
    }

    #[test]
    fn new_state_rejects_invalid_timezone() {
        let result = AppState::new("Mars/Olympus_Mons");

        assert_eq!(
            result.map(|_| ()),
            Err(Error::InvalidTimezoneError("Mars/Olympus_Mons".to_owned()))
        );
    }
}
