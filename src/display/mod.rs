//! Display formatting for terminal output
//!
//! Provides utilities for formatting the session summary and transaction
//! log for terminal display.

pub mod summary;

pub use summary::format_summary;
