//! Export module for txn-analyzer
//!
//! Writes a transaction set in one of three formats:
//! - CSV: spreadsheet-compatible, one row per record
//! - JSON: machine-readable, with export metadata
//! - YAML: human-readable, with export metadata

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::AnalyzerResult;
use crate::models::Transaction;

pub use self::csv::export_csv;
pub use self::json::{export_json, TransactionExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Yaml,
}

/// Write `transactions` to `writer` in the chosen format
pub fn export_transactions<W: Write>(
    transactions: &[&Transaction],
    format: ExportFormat,
    writer: &mut W,
) -> AnalyzerResult<()> {
    match format {
        ExportFormat::Json => export_json(transactions, writer),
        ExportFormat::Csv => export_csv(transactions, writer),
        ExportFormat::Yaml => export_yaml(transactions, writer),
    }
}
