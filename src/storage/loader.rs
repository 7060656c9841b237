//! Data loader
//!
//! Decodes a data file into transaction records. JSON files may hold either
//! a bare array of records or an object with a `transactions` array; `.csv`
//! files need a header row using the record field names.

use std::fs::File;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::Transaction;

use super::file_io::read_json_required;

/// Load every record from a data file, choosing the decoder by extension
pub fn load_transactions<P: AsRef<Path>>(path: P) -> AnalyzerResult<Vec<Transaction>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let transactions = if is_csv {
        load_csv(path)?
    } else {
        load_json(path)?
    };

    debug!(
        path = %path.display(),
        count = transactions.len(),
        "loaded transactions"
    );
    Ok(transactions)
}

fn load_json(path: &Path) -> AnalyzerResult<Vec<Transaction>> {
    let value: Value = read_json_required(path)?;
    let records = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("transactions").ok_or_else(|| {
            AnalyzerError::Storage(format!(
                "{} has no \"transactions\" array",
                path.display()
            ))
        })?,
        _ => {
            return Err(AnalyzerError::Storage(format!(
                "{} must contain an array of transactions",
                path.display()
            )))
        }
    };

    serde_json::from_value(records)
        .map_err(|e| AnalyzerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

fn load_csv(path: &Path) -> AnalyzerResult<Vec<Transaction>> {
    if !path.exists() {
        return Err(AnalyzerError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| AnalyzerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    reader
        .deserialize()
        .enumerate()
        .map(|(row, record)| {
            record.map_err(|e| {
                AnalyzerError::Storage(format!(
                    "Failed to parse {} (row {}): {}",
                    path.display(),
                    row + 1,
                    e
                ))
            })
        })
        .collect()
}
