//! Core data models for txn-analyzer
//!
//! A single entity, the transaction record, plus the value types it is
//! built from.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
