//! Storage layer for txn-analyzer
//!
//! Holds the in-memory transaction store and the file readers that feed it.

pub mod file_io;
pub mod loader;
pub mod transactions;

pub use file_io::{read_json, read_json_required};
pub use loader::load_transactions;
pub use transactions::TransactionStore;
