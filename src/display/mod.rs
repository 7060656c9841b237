//! Display formatting for terminal output

pub mod report;
pub mod transaction;

pub use report::{format_month, format_summary};
pub use transaction::{format_descriptions, format_transaction_details, format_transaction_register};
