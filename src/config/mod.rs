//! Configuration module for txn-analyzer
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AnalyzerPaths;
pub use settings::Settings;
