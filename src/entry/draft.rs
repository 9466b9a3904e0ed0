//! The shared draft behind the three entry panels.
//!
//! All three panels read and write the same [Draft]. Field edits arrive as
//! [DraftMessage]s, one per edited field, and a [SaveAction] turns the draft
//! into a [Transaction].

use time::Date;

use crate::transaction::{Transaction, TransactionType};

/// The reasons a draft cannot be turned into a transaction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    /// The amount field is empty.
    #[error("the amount is missing")]
    MissingAmount,

    /// No category has been selected.
    #[error("the category is missing")]
    MissingCategory,

    /// The amount text is not a finite number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),
}

/// A single field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftMessage {
    /// Change the type used by the "save all" button.
    SetType(TransactionType),
    /// Replace the raw amount text.
    SetAmount(String),
    /// Select a category.
    SetCategory(String),
    /// Change the transaction date.
    SetDate(Date),
    /// Replace the note.
    SetNote(String),
}

/// Which button submitted the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    /// A panel's own save button. The panel's type wins over the draft's type.
    Panel(TransactionType),
    /// The "save all" button, which uses the draft's current type.
    All,
}

impl SaveAction {
    /// The type the submitted transaction will have.
    pub fn resolve(self, draft: &Draft) -> TransactionType {
        match self {
            SaveAction::Panel(type_) => type_,
            SaveAction::All => draft.type_,
        }
    }
}

/// The in-progress values of a transaction that has not been saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    /// The type used by [SaveAction::All].
    ///
    /// No control on the entry page changes this, so "save all" records
    /// income unless a [DraftMessage::SetType] is sent explicitly.
    pub type_: TransactionType,
    /// The raw amount text as typed by the user.
    pub amount: String,
    /// The selected category, empty until one is chosen.
    pub category: String,
    /// When the transaction happened.
    ///
    /// Until [Draft::date_edited] is set this is only a default, and
    /// [Draft::refresh_date] moves it forward to the current day.
    pub date: Date,
    /// Whether the date was picked with [DraftMessage::SetDate].
    pub date_edited: bool,
    /// A free-text note.
    pub note: String,
}

impl Draft {
    /// Create an empty draft dated `today`.
    pub fn new(today: Date) -> Self {
        Self {
            type_: TransactionType::Income,
            amount: String::new(),
            category: String::new(),
            date: today,
            date_edited: false,
            note: String::new(),
        }
    }

    /// Move a default date forward to `today`. A picked date is kept.
    pub fn refresh_date(&mut self, today: Date) {
        if !self.date_edited {
            self.date = today;
        }
    }

    /// Apply a single field edit.
    pub fn update(&mut self, message: DraftMessage) {
        match message {
            DraftMessage::SetType(type_) => self.type_ = type_,
            DraftMessage::SetAmount(amount) => self.amount = amount,
            DraftMessage::SetCategory(category) => self.category = category,
            DraftMessage::SetDate(date) => {
                self.date = date;
                self.date_edited = true;
            }
            DraftMessage::SetNote(note) => self.note = note,
        }
    }

    /// Turn the draft into a transaction and hand it to `on_add`.
    ///
    /// A default date is taken as `today`. On success `on_add` is called
    /// exactly once, the draft is reset to `Draft::new(today)` and the new
    /// transaction is returned. On failure `on_add` is not called and the
    /// draft is left untouched.
    ///
    /// # Errors
    /// Returns a:
    /// - [DraftError::MissingAmount] if the amount is blank,
    /// - [DraftError::MissingCategory] if no category is selected,
    /// - or [DraftError::InvalidAmount] if the amount is not a finite number.
    pub fn submit(
        &mut self,
        action: SaveAction,
        today: Date,
        on_add: impl FnOnce(Transaction),
    ) -> Result<Transaction, DraftError> {
        let amount_text = self.amount.trim();

        if amount_text.is_empty() {
            return Err(DraftError::MissingAmount);
        }

        if self.category.is_empty() {
            return Err(DraftError::MissingCategory);
        }

        let amount = parse_amount(amount_text)?;

        let date = if self.date_edited { self.date } else { today };
        let transaction = Transaction::build(action.resolve(self), amount, &self.category, date)
            .note(&self.note)
            .finalize();

        on_add(transaction.clone());
        *self = Draft::new(today);

        Ok(transaction)
    }
}

fn parse_amount(text: &str) -> Result<f64, DraftError> {
    match text.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(DraftError::InvalidAmount(text.to_owned())),
    }
}
