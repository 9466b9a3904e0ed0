//! Defines the core data model for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

// ============================================================================
// MODELS
// ============================================================================

/// The unique identifier of a [Transaction].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Generate a new, random ID.
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether money was earned, spent or invested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, e.g. a salary.
    #[default]
    Income,
    /// Money spent, e.g. groceries.
    Expense,
    /// Money put into an investment, e.g. stocks.
    Invest,
}

impl TransactionType {
    /// All transaction types in display order.
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Income,
        TransactionType::Expense,
        TransactionType::Invest,
    ];

    /// The lowercase name used in forms and the report table.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Invest => "invest",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded income, expense or investment.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether this was income, an expense or an investment.
    pub type_: TransactionType,
    /// The amount of money earned, spent or invested.
    pub amount: f64,
    /// The category label, e.g. "Salary" or "Food".
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
    /// A free-text note. Empty when the user did not write one.
    pub note: String,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        type_: TransactionType,
        amount: f64,
        category: &str,
        date: Date,
    ) -> TransactionBuilder {
        TransactionBuilder {
            type_,
            amount,
            category: category.to_owned(),
            date,
            note: String::new(),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The ID is only generated when [TransactionBuilder::finalize] is called.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// use crate::transaction::{Transaction, TransactionType};
///
/// let transaction = Transaction::build(TransactionType::Expense, 45.99, "Food", date!(2025-01-15))
///     .note("Coffee with friends")
///     .finalize();
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// Whether this is income, an expense or an investment.
    pub type_: TransactionType,
    /// The amount of money, always finite.
    pub amount: f64,
    /// The category label.
    pub category: String,
    /// The date when the transaction occurred.
    pub date: Date,
    /// An optional note, empty by default.
    pub note: String,
}

impl TransactionBuilder {
    /// Set the note for the transaction.
    pub fn note(mut self, note: &str) -> Self {
        self.note = note.to_owned();
        self
    }

    /// Create the [Transaction] with a freshly generated ID.
    pub fn finalize(self) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            type_: self.type_,
            amount: self.amount,
            category: self.category,
            date: self.date,
            note: self.note,
        }
    }
}
