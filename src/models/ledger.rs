//! Ledger
//!
//! Pairs a [`Budget`] with the [`TransactionLog`] recorded against it. Every
//! accepted expense goes through [`Ledger::record_expense`], which keeps the
//! two in step: the log total always equals the budget's spend.

use tracing::debug;

use super::budget::Budget;
use super::money::Money;
use super::transaction::Transaction;
use super::transaction_log::TransactionLog;
use crate::error::{TrackerError, TrackerResult};

/// A budget and its transaction log
#[derive(Debug, Clone)]
pub struct Ledger {
    budget: Budget,
    log: TransactionLog,
}

impl Ledger {
    /// Start an empty ledger for the given budget
    pub fn new(budget: Budget) -> Self {
        Self {
            budget,
            log: TransactionLog::new(),
        }
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    /// Record one expense in both the log and the budget
    ///
    /// The transaction is validated first, then applied to the budget, and
    /// only then appended. On error neither side has changed.
    pub fn record_expense(
        &mut self,
        description: impl Into<String>,
        amount: Money,
    ) -> TrackerResult<&Transaction> {
        let transaction = Transaction::new(description, amount)?;
        self.budget.add_expense(transaction.amount())?;

        debug!(
            description = transaction.description(),
            amount = %transaction.amount(),
            spent = %self.budget.total_spent(),
            "Recorded expense"
        );

        Ok(self.log.push(transaction))
    }

    /// Total of the log, verified against the budget's spend
    pub fn checked_total(&self) -> TrackerResult<Money> {
        let logged = self.log.total();
        let spent = self.budget.total_spent();

        if logged != spent {
            return Err(TrackerError::Inconsistent { logged, spent });
        }
        Ok(logged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(units: i64) -> Ledger {
        Ledger::new(Budget::new(Money::from_units_cents(units, 0)).unwrap())
    }

    #[test]
    fn test_record_expense_updates_both_sides() {
        let mut ledger = ledger(500_000);
        ledger
            .record_expense("School fees", Money::from_units_cents(150_000, 0))
            .unwrap();
        ledger
            .record_expense("Groceries", Money::from_units_cents(50_000, 0))
            .unwrap();

        assert_eq!(ledger.log().len(), 2);
        assert_eq!(ledger.budget().total_spent(), Money::from_units_cents(200_000, 0));
        assert_eq!(ledger.budget().remaining(), Money::from_units_cents(300_000, 0));
        assert_eq!(ledger.checked_total().unwrap(), ledger.budget().total_spent());
    }

    #[test]
    fn test_rejected_expense_changes_nothing() {
        let mut ledger = ledger(100);
        ledger.record_expense("Tea", Money::from_cents(250)).unwrap();

        assert!(ledger.record_expense("", Money::from_cents(500)).is_err());
        assert!(ledger.record_expense("Gift", Money::zero()).is_err());
        assert!(ledger.record_expense("Gift", Money::from_cents(-500)).is_err());

        assert_eq!(ledger.log().len(), 1);
        assert_eq!(ledger.budget().total_spent(), Money::from_cents(250));
        assert_eq!(ledger.checked_total().unwrap(), Money::from_cents(250));
    }

    #[test]
    fn test_overspend_is_recorded() {
        let mut ledger = ledger(100);
        let txn = ledger
            .record_expense("Phone repair", Money::from_units_cents(150, 0))
            .unwrap();
        assert_eq!(txn.description(), "Phone repair");

        assert!(ledger.budget().is_exceeded());
        assert_eq!(ledger.budget().deficit(), Money::from_units_cents(50, 0));
        assert_eq!(ledger.log().total(), ledger.budget().total_spent());
    }

    #[test]
    fn test_checked_total_detects_mismatch() {
        let mut ledger = ledger(100);
        ledger.record_expense("Bread", Money::from_cents(300)).unwrap();
        // Bypass record_expense to desynchronise the two sides.
        ledger.budget.add_expense(Money::from_cents(100)).unwrap();

        let err = ledger.checked_total().unwrap_err();
        assert!(matches!(err, TrackerError::Inconsistent { .. }));
    }
}
