//! Recording new transactions.
//!
//! This module contains everything related to the entry page:
//! - The [Draft] shared by the income, expense and investment panels
//! - The panel templates and the entry page
//! - The endpoints for editing the draft and saving it to the ledger

mod create_endpoint;
mod draft;
mod draft_endpoint;
mod page;
mod panel;
mod state;

pub use create_endpoint::create_transaction_endpoint;
pub use draft::{Draft, DraftError, DraftMessage, SaveAction};
pub use draft_endpoint::{DraftFieldForm, update_draft_endpoint};
pub use page::{entry_panels_content, get_entry_page};
pub use panel::{PANELS, panel_view};
pub use state::EntryState;
