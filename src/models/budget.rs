//! Budget model
//!
//! Tracks a fixed spending limit and the running total spent against it.
//! Overspending is allowed; it is reported through `is_exceeded` and
//! `deficit`, never blocked.

use std::fmt;

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// A spending limit for the period plus what has been spent so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    total_budget: Money,
    total_spent: Money,
}

impl Budget {
    /// Create a budget with nothing spent yet
    ///
    /// Zero is a valid budget; anything below zero is rejected.
    pub fn new(amount: Money) -> TrackerResult<Self> {
        if amount.is_negative() {
            return Err(TrackerError::negative_budget());
        }

        Ok(Self {
            total_budget: amount,
            total_spent: Money::zero(),
        })
    }

    /// Record an expense against the budget
    pub fn add_expense(&mut self, amount: Money) -> TrackerResult<()> {
        if !amount.is_positive() {
            return Err(TrackerError::non_positive_amount());
        }
        self.total_spent = self
            .total_spent
            .checked_add(amount)
            .ok_or_else(TrackerError::amount_too_large)?;
        Ok(())
    }

    pub fn total_budget(&self) -> Money {
        self.total_budget
    }

    pub fn total_spent(&self) -> Money {
        self.total_spent
    }

    /// Budget minus spend; negative once the budget is exceeded
    pub fn remaining(&self) -> Money {
        self.total_budget - self.total_spent
    }

    pub fn is_exceeded(&self) -> bool {
        self.total_spent > self.total_budget
    }

    /// How far spending is over the budget, zero if it is not
    pub fn deficit(&self) -> Money {
        (self.total_spent - self.total_budget).max(Money::zero())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Budget(total={}, spent={})",
            self.total_budget, self.total_spent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: i64) -> Money {
        Money::from_units_cents(n, 0)
    }

    #[test]
    fn test_negative_budget_rejected() {
        let err = Budget::new(units(-1)).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidBudget(_)));
        assert_eq!(err.to_string(), "Budget cannot be negative");
    }

    #[test]
    fn test_zero_budget() {
        let budget = Budget::new(Money::zero()).unwrap();
        assert_eq!(budget.remaining(), Money::zero());
        assert!(!budget.is_exceeded());
        assert_eq!(budget.deficit(), Money::zero());
    }

    #[test]
    fn test_non_positive_expense_rejected() {
        let mut budget = Budget::new(units(500)).unwrap();
        for amount in [Money::zero(), units(-5)] {
            let err = budget.add_expense(amount).unwrap_err();
            assert!(matches!(err, TrackerError::InvalidTransactionAmount(_)));
        }
        assert_eq!(budget.total_spent(), Money::zero());
    }

    #[test]
    fn test_fractional_expense() {
        let mut budget = Budget::new(units(500)).unwrap();
        budget.add_expense(Money::parse("100.5").unwrap()).unwrap();
        assert_eq!(budget.remaining(), Money::from_cents(39950));
    }

    #[test]
    fn test_within_budget() {
        let mut budget = Budget::new(units(500_000)).unwrap();
        budget.add_expense(units(150_000)).unwrap();
        budget.add_expense(units(50_000)).unwrap();

        assert_eq!(budget.total_spent(), units(200_000));
        assert_eq!(budget.remaining(), units(300_000));
        assert!(!budget.is_exceeded());
        assert_eq!(budget.deficit(), Money::zero());
    }

    #[test]
    fn test_exceeded_budget() {
        let mut budget = Budget::new(units(100)).unwrap();
        budget.add_expense(units(150)).unwrap();

        assert_eq!(budget.total_spent(), units(150));
        assert_eq!(budget.remaining(), units(-50));
        assert!(budget.is_exceeded());
        assert_eq!(budget.deficit(), units(50));
    }

    #[test]
    fn test_spending_exactly_the_budget_is_not_exceeded() {
        let mut budget = Budget::new(units(100)).unwrap();
        budget.add_expense(units(100)).unwrap();
        assert!(!budget.is_exceeded());
        assert_eq!(budget.remaining(), Money::zero());
        assert_eq!(budget.deficit(), Money::zero());
    }

    #[test]
    fn test_derived_values_track_every_expense() {
        let mut budget = Budget::new(units(20)).unwrap();
        let expenses = [750, 1, 899, 350, 2];
        let mut expected = Money::zero();

        for cents in expenses {
            budget.add_expense(Money::from_cents(cents)).unwrap();
            expected = expected + Money::from_cents(cents);

            assert_eq!(budget.total_spent(), expected);
            assert_eq!(budget.remaining(), budget.total_budget() - budget.total_spent());
            assert_eq!(budget.is_exceeded(), budget.total_spent() > budget.total_budget());
            assert_eq!(
                budget.deficit(),
                (budget.total_spent() - budget.total_budget()).max(Money::zero())
            );
        }
    }

    #[test]
    fn test_overflowing_expense_rejected() {
        let mut budget = Budget::new(Money::zero()).unwrap();
        budget.add_expense(Money::from_cents(i64::MAX - 100)).unwrap();

        let err = budget.add_expense(Money::from_cents(101)).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidTransactionAmount(_)));
        assert_eq!(budget.total_spent(), Money::from_cents(i64::MAX - 100));

        budget.add_expense(Money::from_cents(100)).unwrap();
        assert_eq!(budget.total_spent(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_display() {
        let mut budget = Budget::new(units(100)).unwrap();
        budget.add_expense(Money::from_cents(2550)).unwrap();
        assert_eq!(budget.to_string(), "Budget(total=100.00, spent=25.50)");
    }
}
