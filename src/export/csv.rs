//! CSV Export functionality
//!
//! One row per transaction under a header of record field names, the same
//! layout the CSV loader reads.

use std::io::Write;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::Transaction;

/// Export transactions to CSV
pub fn export_csv<W: Write>(transactions: &[&Transaction], writer: &mut W) -> AnalyzerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in transactions {
        csv_writer
            .serialize(txn)
            .map_err(|e| AnalyzerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| AnalyzerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_export_csv() {
        let txn = Transaction::with_details(
            "1",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Money::from_cents(10050),
            "debit",
            "Groceries, weekly",
            "SuperMart",
        );

        let mut buffer = Vec::new();
        export_csv(&[&txn], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "transaction_id,transaction_date,transaction_amount,transaction_type,transaction_description,merchant_name"
        );
        assert_eq!(
            lines.next().unwrap(),
            "1,2024-01-05,100.5,debit,\"Groceries, weekly\",SuperMart"
        );
    }

    #[test]
    fn test_export_csv_empty_writes_nothing() {
        let mut buffer = Vec::new();
        export_csv(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
