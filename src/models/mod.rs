//! Core data models for the expense tracker
//!
//! This module contains the data structures of the budgeting domain: money
//! amounts, transactions, the transaction log and the budget they count
//! against.

pub mod budget;
pub mod ledger;
pub mod money;
pub mod transaction;
pub mod transaction_log;

pub use budget::Budget;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
pub use transaction_log::TransactionLog;
