//! User settings for the expense tracker
//!
//! Settings only shape presentation and the prompt loop (currency label,
//! minimum entry count, timestamp layout). They are read from an optional
//! JSON file and never written back.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TrackerError;

/// Settings file layout this build understands
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// User settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Label printed in front of every amount
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Expenses that must be entered before the user may stop
    #[serde(default = "default_min_transactions")]
    pub min_transactions: usize,

    /// Timestamp format for the transaction log (strftime format)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn default_currency_label() -> String {
    "UGX".to_string()
}

fn default_min_transactions() -> usize {
    5
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_label: default_currency_label(),
            min_transactions: default_min_transactions(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, TrackerError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            TrackerError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check the schema version and that the timestamp format is
    /// something chrono can render
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.schema_version != CURRENT_SCHEMA_VERSION {
            return Err(TrackerError::Config(format!(
                "Unsupported settings schema version: {}",
                self.schema_version
            )));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(TrackerError::Config(format!(
                "Invalid timestamp format: {}",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}
