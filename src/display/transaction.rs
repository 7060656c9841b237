//! Transaction display formatting
//!
//! Register tables and detail views for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

const DESCRIPTION_WIDTH: usize = 32;
const MERCHANT_WIDTH: usize = 20;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Merchant")]
    merchant: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl RegisterRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format(&settings.date_format).to_string(),
            kind: txn.kind.to_string(),
            amount: txn.amount.format_with_symbol(&settings.currency_symbol),
            merchant: truncate(&txn.merchant, MERCHANT_WIDTH),
            description: truncate(&txn.description, DESCRIPTION_WIDTH),
        }
    }
}

/// Format a list of transactions as a register table
pub fn format_transaction_register(transactions: &[&Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let limit = settings.register_limit.unwrap_or(usize::MAX);
    let rows = transactions
        .iter()
        .take(limit)
        .map(|txn| RegisterRow::new(txn, settings));

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    let mut output = table.to_string();
    output.push('\n');

    if transactions.len() > limit {
        output.push_str(&format!(
            "... {} more not shown\n",
            transactions.len() - limit
        ));
    }
    output.push_str(&format!("{} transaction(s)\n", transactions.len()));
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date.format(&settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Type:        {}\n", txn.kind));

    if !txn.merchant.is_empty() {
        output.push_str(&format!("Merchant:    {}\n", txn.merchant));
    }
    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

/// Format descriptions as a numbered list
pub fn format_descriptions(descriptions: &[&str]) -> String {
    if descriptions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    descriptions
        .iter()
        .enumerate()
        .map(|(i, desc)| format!("{:>4}. {}\n", i + 1, desc))
        .collect()
}

/// Truncate a string to at most `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
