//! The transaction model shared by the entry form and the report.
//!
//! A `Transaction` is created by the entry form's submit action and is never
//! modified afterwards.

mod core;

pub use core::{Transaction, TransactionId, TransactionType};
