//! The in-memory list of recorded transactions.
//!
//! The ledger is the owner of every [Transaction]: the entry form hands new
//! transactions to it and the report reads from it. Nothing is written to
//! disk, so the ledger starts empty every time the server starts.

use crate::transaction::Transaction;

/// The canonical, insertion-ordered collection of transactions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `transaction` to the end of the ledger.
    pub fn add(&mut self, transaction: Transaction) {
        tracing::info!(
            "Recorded {} transaction {} for {} in \"{}\"",
            transaction.type_,
            transaction.id,
            transaction.amount,
            transaction.category
        );

        self.transactions.push(transaction);
    }

    /// The transactions in the order they were added.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of recorded transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether no transactions have been recorded.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Remove every transaction.
    pub fn clear(&mut self) {
        tracing::info!("Clearing {} transactions from the ledger", self.len());
        self.transactions.clear();
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::transaction::{Transaction, TransactionType};

    use super::Ledger;

    fn transaction(category: &str) -> Transaction {
        Transaction::build(TransactionType::Expense, 10.0, category, date!(2024 - 02 - 01))
            .finalize()
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = Ledger::new();

        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        let first = transaction("Food");
        let second = transaction("Transport");

        ledger.add(first.clone());
        ledger.add(second.clone());

        assert_eq!(ledger.transactions(), &[first, second]);
    }

    #[test]
    fn clear_removes_everything() {
        let mut ledger = Ledger::new();
        ledger.add(transaction("Food"));
        ledger.add(transaction("Health"));

        ledger.clear();

        assert!(ledger.is_empty());
    }
}
