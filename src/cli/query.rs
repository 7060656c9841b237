//! Query operations and their CLI commands
//!
//! [`Operation`] is a fully decoded request against the query engine. Both the
//! one-shot `query` subcommands and the interactive menu build one and render
//! its result through [`Operation::execute`].

use chrono::NaiveDate;
use clap::Subcommand;
use tracing::debug;

use crate::config::Settings;
use crate::display::{
    format_descriptions, format_month, format_summary, format_transaction_details,
    format_transaction_register,
};
use crate::error::AnalyzerResult;
use crate::models::Money;
use crate::storage::TransactionStore;

use super::args::{parse_amount, parse_date, DateComponents};

/// A decoded query request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ShowAll,
    UniqueTypes,
    TotalAmount,
    TotalByDate(DateComponents),
    ByType(String),
    DateRange { start: NaiveDate, end: NaiveDate },
    ByMerchant(String),
    Average,
    AmountRange { min: Money, max: Money },
    TotalDebit,
    TopMonth,
    TopDebitMonth,
    DominantType,
    BeforeDate(NaiveDate),
    FindById(String),
    Descriptions,
    Summary,
}

impl Operation {
    /// Run the operation and render its result as text
    pub fn execute(&self, store: &TransactionStore, settings: &Settings) -> AnalyzerResult<String> {
        debug!(operation = ?self, "executing");
        let query = store.query();
        let money = |amount: Money| amount.format_with_symbol(&settings.currency_symbol);

        let output = match self {
            Self::ShowAll => format!(
                "All transactions:\n{}",
                format_transaction_register(&store.all().iter().collect::<Vec<_>>(), settings)
            ),
            Self::UniqueTypes => {
                let kinds: Vec<_> = query.unique_types().into_iter().map(|k| k.as_str()).collect();
                format!("Unique transaction types: {}\n", kinds.join(", "))
            }
            Self::TotalAmount => format!("Total amount: {}\n", money(query.total_amount())),
            Self::TotalByDate(components) => format!(
                "Total amount for {}: {}\n",
                components,
                money(query.total_amount_by_date(components))
            ),
            Self::ByType(kind) => format!(
                "Transactions of type \"{}\":\n{}",
                kind,
                format_transaction_register(&query.by_type(kind), settings)
            ),
            Self::DateRange { start, end } => format!(
                "Transactions from {} to {}:\n{}",
                start,
                end,
                format_transaction_register(&query.in_date_range(*start, *end), settings)
            ),
            Self::ByMerchant(merchant) => format!(
                "Transactions at \"{}\":\n{}",
                merchant,
                format_transaction_register(&query.by_merchant(merchant), settings)
            ),
            Self::Average => format!("Average amount: {}\n", money(query.average_amount()?)),
            Self::AmountRange { min, max } => format!(
                "Transactions with amounts from {} to {}:\n{}",
                money(*min),
                money(*max),
                format_transaction_register(&query.by_amount_range(*min, *max), settings)
            ),
            Self::TotalDebit => format!("Total debit amount: {}\n", money(query.total_debit_amount())),
            Self::TopMonth => format!(
                "Month with the most transactions: {}\n",
                format_month(query.most_transactions_month())
            ),
            Self::TopDebitMonth => format!(
                "Month with the most debit transactions: {}\n",
                format_month(query.most_transactions_month_debit())
            ),
            Self::DominantType => format!(
                "Most common transaction type: {}\n",
                query.dominant_type()
            ),
            Self::BeforeDate(date) => format!(
                "Transactions before {}:\n{}",
                date,
                format_transaction_register(&query.before_date(*date), settings)
            ),
            Self::FindById(id) => match query.find_by_id(id) {
                Some(txn) => format!(
                    "Transaction with ID {}:\n{}",
                    id,
                    format_transaction_details(txn, settings)
                ),
                None => format!("Transaction with ID {} not found.\n", id),
            },
            Self::Descriptions => format!(
                "Descriptions of all transactions:\n{}",
                format_descriptions(&query.descriptions())
            ),
            Self::Summary => format_summary(&query.summary(), settings),
        };

        Ok(output)
    }
}

/// Query subcommands
#[derive(Subcommand, Debug)]
pub enum QueryCommands {
    /// Show every transaction
    All,
    /// List the distinct transaction types
    Types,
    /// Sum of all amounts
    Total,
    /// Sum of amounts matching a year, month and/or day (compared as text, e.g. --month 03)
    TotalByDate {
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        day: Option<String>,
    },
    /// Transactions of a type (e.g. debit, credit)
    ByType { kind: String },
    /// Transactions between two dates, inclusive (YYYY-MM-DD)
    Range { start: String, end: String },
    /// Transactions with a merchant
    Merchant { name: String },
    /// Average amount
    Average,
    /// Transactions with amounts between min and max, inclusive
    AmountRange {
        #[arg(allow_hyphen_values = true)]
        min: String,
        #[arg(allow_hyphen_values = true)]
        max: String,
    },
    /// Sum of debit amounts
    TotalDebit,
    /// Month of year with the most transactions
    TopMonth,
    /// Month of year with the most debit transactions
    TopDebitMonth,
    /// Whether debits or credits are more common
    Dominant,
    /// Transactions strictly before a date (YYYY-MM-DD)
    Before { date: String },
    /// Look up a transaction by ID
    Find { id: String },
    /// List every description
    Descriptions,
    /// Headline aggregates in one view
    Summary,
}

impl QueryCommands {
    /// Decode the command's text arguments into an [`Operation`]
    pub fn into_operation(self) -> AnalyzerResult<Operation> {
        let op = match self {
            Self::All => Operation::ShowAll,
            Self::Types => Operation::UniqueTypes,
            Self::Total => Operation::TotalAmount,
            Self::TotalByDate { year, month, day } => {
                Operation::TotalByDate(DateComponents { year, month, day })
            }
            Self::ByType { kind } => Operation::ByType(kind),
            Self::Range { start, end } => Operation::DateRange {
                start: parse_date(&start)?,
                end: parse_date(&end)?,
            },
            Self::Merchant { name } => Operation::ByMerchant(name),
            Self::Average => Operation::Average,
            Self::AmountRange { min, max } => Operation::AmountRange {
                min: parse_amount(&min)?,
                max: parse_amount(&max)?,
            },
            Self::TotalDebit => Operation::TotalDebit,
            Self::TopMonth => Operation::TopMonth,
            Self::TopDebitMonth => Operation::TopDebitMonth,
            Self::Dominant => Operation::DominantType,
            Self::Before { date } => Operation::BeforeDate(parse_date(&date)?),
            Self::Find { id } => Operation::FindById(id),
            Self::Descriptions => Operation::Descriptions,
            Self::Summary => Operation::Summary,
        };
        Ok(op)
    }
}

/// Handle a query command
pub fn handle_query_command(
    store: &TransactionStore,
    settings: &Settings,
    cmd: QueryCommands,
) -> AnalyzerResult<()> {
    let output = cmd.into_operation()?.execute(store, settings)?;
    print!("{}", output);
    Ok(())
}
