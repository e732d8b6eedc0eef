//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Negative or unparseable budget amount
    #[error("{0}")]
    InvalidBudget(String),

    /// Non-positive or unparseable expense amount
    #[error("{0}")]
    InvalidTransactionAmount(String),

    /// Blank expense description
    #[error("Expense description cannot be empty")]
    EmptyDescription,

    /// Standard input ended before the session finished
    #[error("Input stream closed before the session finished")]
    InputClosed,

    /// The transaction log and the budget disagree on what was spent
    #[error("Transaction log total {logged} does not match budget spend {spent}")]
    Inconsistent { logged: Money, spent: Money },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl TrackerError {
    /// Create the error for a budget below zero
    pub fn negative_budget() -> Self {
        Self::InvalidBudget("Budget cannot be negative".into())
    }

    /// Create the error for budget input that is not a number
    pub fn unparseable_budget(input: &str) -> Self {
        Self::InvalidBudget(format!("Budget must be a number, got '{}'", input))
    }

    /// Create the error for a zero or negative expense
    pub fn non_positive_amount() -> Self {
        Self::InvalidTransactionAmount("Expense amount must be positive".into())
    }

    /// Create the error for an expense that would overflow the running total
    pub fn amount_too_large() -> Self {
        Self::InvalidTransactionAmount("Expense amount is too large to record".into())
    }

    /// Create the error for expense input that is not a number
    pub fn unparseable_amount(input: &str) -> Self {
        Self::InvalidTransactionAmount(format!("Expense amount must be a number, got '{}'", input))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidBudget(_) | Self::InvalidTransactionAmount(_) | Self::EmptyDescription
        )
    }

    /// Check if the session can carry on by re-issuing the prompt
    pub fn is_recoverable(&self) -> bool {
        self.is_validation()
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
