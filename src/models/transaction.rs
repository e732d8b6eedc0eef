//! Transaction model
//!
//! Represents a single recorded expense. A transaction is validated once, at
//! construction, and never changes afterwards.

use chrono::{DateTime, Local};
use std::fmt;

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Timestamp layout used by the `Display` impl
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    description: String,
    amount: Money,
    timestamp: DateTime<Local>,
}

impl Transaction {
    /// Create a new transaction stamped with the current local time
    ///
    /// The description is trimmed; it must not be blank. The amount must be
    /// strictly positive.
    pub fn new(description: impl Into<String>, amount: Money) -> TrackerResult<Self> {
        let description = description.into();
        let description = description.trim();

        if description.is_empty() {
            return Err(TrackerError::EmptyDescription);
        }
        if !amount.is_positive() {
            return Err(TrackerError::non_positive_amount());
        }

        Ok(Self {
            description: description.to_string(),
            amount,
            timestamp: Local::now(),
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// When the transaction was recorded
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} [{}]",
            self.description,
            self.amount,
            self.timestamp.format(DEFAULT_TIMESTAMP_FORMAT)
        )
    }
}
