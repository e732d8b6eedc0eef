//! Tracing setup
//!
//! Logs go to stderr so stdout carries only the interactive transcript.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Map a `-v` count to a log level
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Initializes the global tracing subscriber once per process.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::new(format!(
            "expense_tracker={}",
            level_for_verbosity(verbosity)
        ));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
