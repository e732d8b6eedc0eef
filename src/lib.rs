//! Expense Tracker - interactive weekly budget tracking for the terminal
//!
//! The user enters a weekly budget and a series of expenses; the tracker
//! reports what is left (or how far over budget they are) along with a
//! timestamped transaction log.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings and logging setup
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, budget, ledger)
//! - `display`: Summary formatting
//! - `manager`: The interactive session
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::Settings;
//! use expense_tracker::manager::FinanceManager;
//!
//! let stdin = std::io::stdin();
//! let manager = FinanceManager::new(Settings::default(), stdin.lock(), std::io::stdout())?;
//! let ledger = manager.run()?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod manager;
pub mod models;

pub use error::{TrackerError, TrackerResult};
