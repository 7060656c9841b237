//! Transaction model
//!
//! Represents one financial movement as it appears in the source data.
//! The sign convention lives in the transaction type, not in the amount.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Type tag of a transaction
///
/// The source data treats this as an open string; `debit` and `credit` are
/// the conventional values and get their own variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    Debit,
    Credit,
    /// Any other tag, kept verbatim
    Other(String),
}

impl TransactionKind {
    /// The tag exactly as it appears in data files
    pub fn as_str(&self) -> &str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_debit(&self) -> bool {
        matches!(self, Self::Debit)
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Credit)
    }
}

impl From<&str> for TransactionKind {
    fn from(tag: &str) -> Self {
        match tag {
            "debit" => Self::Debit,
            "credit" => Self::Credit,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "debit" => Self::Debit,
            "credit" => Self::Credit,
            _ => Self::Other(tag),
        }
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier from the source data
    #[serde(rename = "transaction_id", alias = "id")]
    pub id: TransactionId,

    /// Calendar date, no time of day
    #[serde(rename = "transaction_date", alias = "date")]
    pub date: NaiveDate,

    /// Non-negative magnitude in the source data
    #[serde(rename = "transaction_amount", alias = "amount")]
    pub amount: Money,

    #[serde(rename = "transaction_type", alias = "type")]
    pub kind: TransactionKind,

    #[serde(rename = "transaction_description", alias = "description", default)]
    pub description: String,

    /// Counterparty name
    #[serde(rename = "merchant_name", alias = "merchant", default)]
    pub merchant: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: impl Into<TransactionId>,
        date: NaiveDate,
        amount: Money,
        kind: impl Into<TransactionKind>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            amount,
            kind: kind.into(),
            description: String::new(),
            merchant: String::new(),
        }
    }

    /// Create a transaction with all fields
    pub fn with_details(
        id: impl Into<TransactionId>,
        date: NaiveDate,
        amount: Money,
        kind: impl Into<TransactionKind>,
        description: impl Into<String>,
        merchant: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(id, date, amount, kind);
        txn.description = description.into();
        txn.merchant = merchant.into();
        txn
    }

    pub fn is_debit(&self) -> bool {
        self.kind.is_debit()
    }

    pub fn is_credit(&self) -> bool {
        self.kind.is_credit()
    }

    /// Month of year, 1-12
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Zero-padded `[YYYY, MM, DD]` components of the date
    pub fn date_components(&self) -> [String; 3] {
        [
            self.date.format("%Y").to_string(),
            self.date.format("%m").to_string(),
            self.date.format("%d").to_string(),
        ]
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.merchant,
            self.amount
        )
    }
}
