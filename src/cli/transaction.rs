//! Transaction CLI commands
//!
//! `add` appends a record to the in-memory store for this run and shows the
//! resulting register. Nothing is written back to the data file.

use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::AnalyzerResult;
use crate::models::{Transaction, TransactionId};
use crate::storage::TransactionStore;

use super::args::{parse_amount, parse_date};

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction date (YYYY-MM-DD)
    pub date: String,
    /// Amount (e.g. "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Transaction type (e.g. debit, credit)
    pub kind: String,
    /// Identifier; a random one is generated when omitted
    #[arg(long)]
    pub id: Option<String>,
    /// Free-text description
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Merchant name
    #[arg(short, long, default_value = "")]
    pub merchant: String,
}

impl AddArgs {
    /// Build the transaction these arguments describe
    pub fn into_transaction(self) -> AnalyzerResult<Transaction> {
        let date = parse_date(&self.date)?;
        let amount = parse_amount(&self.amount)?;
        let id = self
            .id
            .map(TransactionId::from)
            .unwrap_or_else(TransactionId::generate);

        Ok(Transaction::with_details(
            id,
            date,
            amount,
            self.kind,
            self.description,
            self.merchant,
        ))
    }
}

/// Handle `add`
pub fn handle_add_command(
    store: &mut TransactionStore,
    settings: &Settings,
    args: AddArgs,
) -> AnalyzerResult<()> {
    let txn = args.into_transaction()?;
    info!(id = %txn.id, "adding transaction for this session");

    println!("Added transaction:");
    print!("{}", format_transaction_details(&txn, settings));
    store.add(txn);

    println!();
    let all: Vec<_> = store.all().iter().collect();
    print!("{}", format_transaction_register(&all, settings));
    Ok(())
}
