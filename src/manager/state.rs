//! Session states
//!
//! A session moves strictly forward:
//! `AwaitingBudget -> CollectingTransactions -> Summarizing -> Done`.

use std::fmt;

use crate::models::Ledger;

/// Where a finance session is in its lifecycle
#[derive(Debug)]
pub enum SessionState {
    /// No valid budget has been entered yet
    AwaitingBudget,
    /// Budget is set; expenses are being entered
    CollectingTransactions(Ledger),
    /// Entry is finished; the summary is due
    Summarizing(Ledger),
    /// Summary printed; the session is over
    Done(Ledger),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitingBudget => "awaiting-budget",
            Self::CollectingTransactions(_) => "collecting-transactions",
            Self::Summarizing(_) => "summarizing",
            Self::Done(_) => "done",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
