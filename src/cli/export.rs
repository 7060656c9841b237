//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::export::{export_transactions, ExportFormat};
use crate::storage::TransactionStore;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path; standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `export`
pub fn handle_export_command(store: &TransactionStore, args: ExportArgs) -> AnalyzerResult<()> {
    let transactions: Vec<_> = store.all().iter().collect();

    match args.output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                AnalyzerError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export_transactions(&transactions, args.format, &mut writer)?;
            writer.flush()?;

            info!(path = %output.display(), "export written");
            println!(
                "Exported {} transactions to: {}",
                transactions.len(),
                output.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export_transactions(&transactions, args.format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
