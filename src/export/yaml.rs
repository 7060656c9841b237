//! YAML Export functionality

use std::io::Write;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::export::json::TransactionExport;
use crate::models::Transaction;

/// Export transactions as YAML with a short comment header
pub fn export_yaml<W: Write>(transactions: &[&Transaction], writer: &mut W) -> AnalyzerResult<()> {
    let export = TransactionExport::new(transactions);

    writeln!(writer, "# txn-analyzer transaction export")
        .map_err(|e| AnalyzerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| AnalyzerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AnalyzerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AnalyzerError::Export(e.to_string()))?;

    Ok(())
}
