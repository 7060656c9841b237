//! Custom error types for txn-analyzer
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for txn-analyzer operations
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// User-supplied text that could not be decoded into an argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An aggregate that is undefined over an empty collection
    #[error("No data: {0}")]
    NoData(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl AnalyzerError {
    /// Create an "invalid argument" error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is a "no data" error
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData(_))
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for txn-analyzer operations
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
