//! JSON Export functionality
//!
//! Writes the transaction set wrapped with schema and summary metadata. The
//! wrapper keeps a `transactions` array, so the output loads back as data.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::Transaction;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported transaction set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub metadata: ExportMetadata,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    /// Earliest transaction date
    pub earliest_transaction: Option<String>,
    /// Latest transaction date
    pub latest_transaction: Option<String>,
}

impl TransactionExport {
    pub fn new(transactions: &[&Transaction]) -> Self {
        let earliest = transactions.iter().map(|t| t.date).min();
        let latest = transactions.iter().map(|t| t.date).max();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                transaction_count: transactions.len(),
                earliest_transaction: earliest.map(|d| d.to_string()),
                latest_transaction: latest.map(|d| d.to_string()),
            },
            transactions: transactions.iter().map(|t| (*t).clone()).collect(),
        }
    }
}

/// Export transactions as pretty-printed JSON
pub fn export_json<W: Write>(transactions: &[&Transaction], writer: &mut W) -> AnalyzerResult<()> {
    let export = TransactionExport::new(transactions);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| AnalyzerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AnalyzerError::Export(e.to_string()))?;
    Ok(())
}
