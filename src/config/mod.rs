//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - User settings loaded from an optional JSON file
//! - Logging initialisation

pub mod logging;
pub mod settings;

pub use logging::init_tracing;
pub use settings::Settings;
