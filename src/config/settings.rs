//! User settings for txn-analyzer
//!
//! Display preferences and the data file location, read as JSON from the
//! config directory. Missing fields fall back to defaults.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::AnalyzerPaths;
use crate::error::AnalyzerError;
use crate::storage::read_json;

/// User settings for txn-analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Data file to load instead of the default location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Maximum rows shown in a register; unlimited when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_limit: Option<usize>,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            data_file: None,
            register_limit: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or the defaults if the file doesn't exist
    pub fn load_or_default(paths: &AnalyzerPaths) -> Result<Self, AnalyzerError> {
        let settings: Settings = read_json(paths.settings_file()).map_err(|e| {
            AnalyzerError::Config(format!("Failed to load settings: {}", e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would fail at render time
    ///
    /// The date format must render a plain calendar date; time and zone
    /// specifiers such as `%H` or `%z` have nothing to show for a date.
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        let mut rendered = String::new();
        write!(rendered, "{}", sample.format(&self.date_format)).map_err(|_| {
            AnalyzerError::Config(format!("Invalid date format: {}", self.date_format))
        })?;
        Ok(())
    }

    /// Pick the data file: explicit override, then settings, then the default
    pub fn resolve_data_file(&self, paths: &AnalyzerPaths, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| paths.transactions_file())
    }
}
