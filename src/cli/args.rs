//! Decoding of user-typed arguments
//!
//! Text from prompts and the command line is turned into typed values here,
//! before it reaches the query engine. Anything that does not parse is an
//! [`AnalyzerError::InvalidArgument`].

use chrono::NaiveDate;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::Money;

pub use crate::services::DateComponents;

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(input: &str) -> AnalyzerResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| {
        AnalyzerError::invalid_argument(format!(
            "Invalid date '{}': expected YYYY-MM-DD ({})",
            input, e
        ))
    })
}

/// Parse an amount such as `100`, `12.50` or `$12.50`
pub fn parse_amount(input: &str) -> AnalyzerResult<Money> {
    Money::parse(input).map_err(|e| {
        AnalyzerError::invalid_argument(format!("Invalid amount '{}': {}", input.trim(), e))
    })
}
