//! In-memory transaction store
//!
//! Owns the ordered sequence of records. The only mutation is appending;
//! reads hand out borrowed slices so nothing outside can rewrite the data.

use std::path::Path;

use tracing::debug;

use crate::error::AnalyzerResult;
use crate::models::Transaction;
use crate::services::TransactionQuery;

use super::loader::load_transactions;

/// Owner of every transaction record, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create a store holding the given records
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Create a store from a data file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AnalyzerResult<Self> {
        Ok(Self::new(load_transactions(path)?))
    }

    /// Append a transaction at the end. No validation is performed.
    pub fn add(&mut self, transaction: Transaction) {
        debug!(id = %transaction.id, "adding transaction");
        self.transactions.push(transaction);
    }

    /// All transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Borrow the records for querying
    pub fn query(&self) -> TransactionQuery<'_> {
        TransactionQuery::new(&self.transactions)
    }
}

impl From<Vec<Transaction>> for TransactionStore {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}
