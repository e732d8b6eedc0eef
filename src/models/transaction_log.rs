//! Transaction log
//!
//! An append-only, insertion-ordered collection of transactions. Order is
//! meaningful: it drives the numbering of the printed log.

use std::fmt;
use std::slice;

use super::money::Money;
use super::transaction::Transaction;
use crate::error::{TrackerError, TrackerResult};

/// Ordered collection of recorded expenses
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    transactions: Vec<Transaction>,
}

impl TransactionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transaction and append it to the log
    ///
    /// Nothing is appended when the transaction fails validation or would
    /// overflow the log total.
    pub fn add_transaction(
        &mut self,
        description: impl Into<String>,
        amount: Money,
    ) -> TrackerResult<&Transaction> {
        let transaction = Transaction::new(description, amount)?;
        if self.total().checked_add(transaction.amount()).is_none() {
            return Err(TrackerError::amount_too_large());
        }
        Ok(self.push(transaction))
    }

    /// Append an already validated transaction
    pub(crate) fn push(&mut self, transaction: Transaction) -> &Transaction {
        self.transactions.push(transaction);
        // Just pushed, so the log is non-empty.
        &self.transactions[self.transactions.len() - 1]
    }

    /// Sum of every transaction amount; zero for an empty log
    pub fn total(&self) -> Money {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    /// Number of transactions held
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// The most recently added transaction
    pub fn last(&self) -> Option<&Transaction> {
        self.transactions.last()
    }
}

impl<'a> IntoIterator for &'a TransactionLog {
    type Item = &'a Transaction;
    type IntoIter = slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TransactionLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionLog(count={})", self.len())
    }
}
