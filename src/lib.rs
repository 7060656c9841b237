//! txn-analyzer - query a list of financial transactions from the terminal
//!
//! Transactions are loaded from a JSON or CSV file into an in-memory store.
//! A stateless query engine answers aggregate and filter questions over the
//! store, and results are shown either through one-shot subcommands or an
//! interactive numbered menu.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: transaction, money and identifier types
//! - `storage`: file loading and the transaction store
//! - `services`: the query engine
//! - `display`: table and report formatting
//! - `export`: JSON, CSV and YAML writers
//! - `cli`: command handlers and the interactive menu
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use txn_analyzer::storage::TransactionStore;
//!
//! let store = TransactionStore::from_file("transactions.json")?;
//! println!("{}", store.query().total_amount());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{AnalyzerError, AnalyzerResult};
