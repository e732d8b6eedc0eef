//! Interactive finance session
//!
//! Walks the user from entering a budget, through recording expenses, to
//! the final summary.

pub mod finance;
pub mod prompt;
pub mod state;

pub use finance::FinanceManager;
pub use prompt::Prompter;
pub use state::SessionState;
