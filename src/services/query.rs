//! Transaction query engine
//!
//! Read-only filters and aggregates over a borrowed slice of transactions.
//! Every filter keeps the relative order of the input; nothing here mutates
//! or caches, so repeated calls with the same arguments give the same answer.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use tracing::trace;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{Money, Transaction, TransactionKind};

/// Month value meaning "no applicable month"
pub const NO_MONTH: u32 = 0;

/// Which of debit or credit occurs more often
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantType {
    Debit,
    Credit,
    /// Counts are equal, including both zero
    Equal,
}

impl DominantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
            Self::Equal => "equal",
        }
    }
}

impl fmt::Display for DominantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Year/month/day components to match against, each optional
///
/// Components are compared as text against the zero-padded parts of each
/// record's `YYYY-MM-DD` date, so `"3"` does not match a stored `"03"`.
/// An empty component is treated the same as an omitted one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateComponents {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

impl DateComponents {
    /// Create an empty filter that matches every date
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `YYYY-MM-DD` style input on `-` without normalizing the parts
    pub fn parse(input: &str) -> Self {
        let mut parts = input.trim().split('-').map(str::to_string);
        Self {
            year: parts.next(),
            month: parts.next(),
            day: parts.next(),
        }
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    /// Check a transaction's date against every supplied component
    pub fn matches(&self, txn: &Transaction) -> bool {
        let [year, month, day] = txn.date_components();
        component_matches(&self.year, &year)
            && component_matches(&self.month, &month)
            && component_matches(&self.day, &day)
    }
}

/// Renders as `YYYY-MM-DD` with `*` standing in for omitted components
impl fmt::Display for DateComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |part: &Option<String>| match part.as_deref() {
            None | Some("") => "*".to_string(),
            Some(value) => value.to_string(),
        };
        write!(f, "{}-{}-{}", show(&self.year), show(&self.month), show(&self.day))
    }
}

fn component_matches(wanted: &Option<String>, actual: &str) -> bool {
    match wanted.as_deref() {
        None | Some("") => true,
        Some(wanted) => wanted == actual,
    }
}

/// Aggregate overview of a transaction set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub total: Money,
    pub total_debit: Money,
    pub total_credit: Money,
    /// `None` when there are no transactions
    pub average: Option<Money>,
    pub dominant_type: DominantType,
    pub busiest_month: u32,
    pub busiest_debit_month: u32,
    pub unique_types: Vec<String>,
}

/// Stateless queries over a borrowed transaction sequence
#[derive(Debug, Clone, Copy)]
pub struct TransactionQuery<'a> {
    transactions: &'a [Transaction],
}

impl<'a> TransactionQuery<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    /// Number of transactions under query
    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    /// Distinct type tags in first-seen order
    pub fn unique_types(&self) -> Vec<&'a TransactionKind> {
        let mut seen = HashSet::new();
        self.transactions
            .iter()
            .map(|t| &t.kind)
            .filter(|kind| seen.insert(*kind))
            .collect()
    }

    /// Sum of every amount; zero when empty
    pub fn total_amount(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Sum of amounts whose date matches every supplied component
    pub fn total_amount_by_date(&self, components: &DateComponents) -> Money {
        trace!(?components, "total by date");
        self.transactions
            .iter()
            .filter(|t| components.matches(t))
            .map(|t| t.amount)
            .sum()
    }

    /// Transactions whose type tag equals `kind` exactly
    pub fn by_type(&self, kind: &str) -> Vec<&'a Transaction> {
        self.filter(|t| t.kind.as_str() == kind)
    }

    /// Transactions dated within `[start, end]`
    pub fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&'a Transaction> {
        self.filter(|t| t.date >= start && t.date <= end)
    }

    /// Transactions whose merchant equals `merchant` exactly
    pub fn by_merchant(&self, merchant: &str) -> Vec<&'a Transaction> {
        self.filter(|t| t.merchant == merchant)
    }

    /// Mean amount, rounded to the nearest cent.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::NoData`] when there are no transactions.
    pub fn average_amount(&self) -> AnalyzerResult<Money> {
        self.total_amount()
            .div_round(self.transactions.len())
            .ok_or_else(|| {
                AnalyzerError::NoData("cannot average an empty set of transactions".into())
            })
    }

    /// Transactions with `min <= amount <= max`
    pub fn by_amount_range(&self, min: Money, max: Money) -> Vec<&'a Transaction> {
        self.filter(|t| t.amount >= min && t.amount <= max)
    }

    pub fn total_debit_amount(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_debit())
            .map(|t| t.amount)
            .sum()
    }

    pub fn total_credit_amount(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_credit())
            .map(|t| t.amount)
            .sum()
    }

    /// Transaction counts per month of year; index 0 is January.
    ///
    /// Records from different years fall into the same bucket.
    pub fn monthly_counts(&self) -> [usize; 12] {
        month_counts(self.transactions.iter())
    }

    /// Month of year (1-12) with the most transactions, or [`NO_MONTH`]
    pub fn most_transactions_month(&self) -> u32 {
        busiest_month(&self.monthly_counts())
    }

    /// Month of year (1-12) with the most debit transactions, or [`NO_MONTH`]
    pub fn most_transactions_month_debit(&self) -> u32 {
        busiest_month(&month_counts(
            self.transactions.iter().filter(|t| t.is_debit()),
        ))
    }

    /// Compare debit and credit counts; other types are ignored
    pub fn dominant_type(&self) -> DominantType {
        let (debits, credits) =
            self.transactions
                .iter()
                .fold((0usize, 0usize), |(d, c), t| match t.kind {
                    TransactionKind::Debit => (d + 1, c),
                    TransactionKind::Credit => (d, c + 1),
                    TransactionKind::Other(_) => (d, c),
                });

        match debits.cmp(&credits) {
            std::cmp::Ordering::Greater => DominantType::Debit,
            std::cmp::Ordering::Less => DominantType::Credit,
            std::cmp::Ordering::Equal => DominantType::Equal,
        }
    }

    /// Transactions dated strictly before `date`
    pub fn before_date(&self, date: NaiveDate) -> Vec<&'a Transaction> {
        self.filter(|t| t.date < date)
    }

    /// First transaction with the given identifier
    pub fn find_by_id(&self, id: &str) -> Option<&'a Transaction> {
        self.transactions.iter().find(|t| t.id == *id)
    }

    /// Every description, positionally aligned with the input
    pub fn descriptions(&self) -> Vec<&'a str> {
        self.transactions
            .iter()
            .map(|t| t.description.as_str())
            .collect()
    }

    /// Bundle the headline aggregates into one value
    pub fn summary(&self) -> Summary {
        Summary {
            count: self.count(),
            total: self.total_amount(),
            total_debit: self.total_debit_amount(),
            total_credit: self.total_credit_amount(),
            average: self.average_amount().ok(),
            dominant_type: self.dominant_type(),
            busiest_month: self.most_transactions_month(),
            busiest_debit_month: self.most_transactions_month_debit(),
            unique_types: self
                .unique_types()
                .into_iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }

    fn filter<F>(&self, predicate: F) -> Vec<&'a Transaction>
    where
        F: Fn(&Transaction) -> bool,
    {
        self.transactions.iter().filter(|t| predicate(*t)).collect()
    }
}

fn month_counts<'t>(transactions: impl Iterator<Item = &'t Transaction>) -> [usize; 12] {
    let mut counts = [0usize; 12];
    for txn in transactions {
        counts[(txn.month() - 1) as usize] += 1;
    }
    counts
}

// Ascending scan with a strict comparison: the lowest month wins a tie.
fn busiest_month(counts: &[usize; 12]) -> u32 {
    let mut best = NO_MONTH;
    let mut best_count = 0;
    for (index, &count) in counts.iter().enumerate() {
        if count > best_count {
            best_count = count;
            best = index as u32 + 1;
        }
    }
    best
}
