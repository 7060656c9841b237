//! Service layer for txn-analyzer
//!
//! The service layer provides the read-only query and aggregation logic on
//! top of the storage layer.

pub mod query;

pub use query::{DateComponents, DominantType, Summary, TransactionQuery, NO_MONTH};
