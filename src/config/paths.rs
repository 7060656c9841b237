//! Path management for txn-analyzer
//!
//! ## Path Resolution Order
//!
//! 1. `TXN_ANALYZER_HOME` environment variable (if set)
//! 2. The platform config directory (`~/.config/txn-analyzer` on Linux,
//!    `%APPDATA%\txn-analyzer\config` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::AnalyzerError;

/// Manages all paths used by txn-analyzer
#[derive(Debug, Clone)]
pub struct AnalyzerPaths {
    base_dir: PathBuf,
}

impl AnalyzerPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AnalyzerError> {
        let base_dir = if let Ok(custom) = std::env::var("TXN_ANALYZER_HOME") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "txn-analyzer")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    AnalyzerError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create AnalyzerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location of the transaction data file
    pub fn transactions_file(&self) -> PathBuf {
        self.base_dir.join("transactions.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AnalyzerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("transactions.json")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var("TXN_ANALYZER_HOME", custom_path);
        let paths = AnalyzerPaths::new().unwrap();
        std::env::remove_var("TXN_ANALYZER_HOME");

        assert_eq!(paths.base_dir(), temp_dir.path());
    }
}
