//! CLI command handlers
//!
//! Bridges clap argument parsing with the store and query engine.

pub mod args;
pub mod export;
pub mod menu;
pub mod query;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs};
pub use menu::{Menu, MenuAction};
pub use query::{handle_query_command, Operation, QueryCommands};
pub use transaction::{handle_add_command, AddArgs};
