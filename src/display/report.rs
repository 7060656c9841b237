//! Report formatting utilities for terminal output
//!
//! Renders aggregate results: month numbers, dominant type and the
//! summary overview.

use crate::config::Settings;
use crate::models::Money;
use crate::services::{Summary, NO_MONTH};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a month number, `None` outside 1-12
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

/// Render a month number together with its name; the sentinel reads as "none"
pub fn format_month(month: u32) -> String {
    match month_name(month) {
        Some(name) if month != NO_MONTH => format!("{} ({})", month, name),
        _ => format!("{} (none)", NO_MONTH),
    }
}

pub fn format_money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format the summary overview
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Transaction Summary\n");
    output.push_str(&separator(40));
    output.push('\n');

    output.push_str(&format!("{:<22}{}\n", "Transactions:", summary.count));
    output.push_str(&format!(
        "{:<22}{}\n",
        "Total amount:",
        format_money(summary.total, settings)
    ));
    output.push_str(&format!(
        "{:<22}{}\n",
        "Debit total:",
        format_money(summary.total_debit, settings)
    ));
    output.push_str(&format!(
        "{:<22}{}\n",
        "Credit total:",
        format_money(summary.total_credit, settings)
    ));

    let average = match summary.average {
        Some(avg) => format_money(avg, settings),
        None => "n/a (no transactions)".to_string(),
    };
    output.push_str(&format!("{:<22}{}\n", "Average amount:", average));

    output.push_str(&format!(
        "{:<22}{}\n",
        "Most common type:", summary.dominant_type
    ));
    output.push_str(&format!(
        "{:<22}{}\n",
        "Busiest month:",
        format_month(summary.busiest_month)
    ));
    output.push_str(&format!(
        "{:<22}{}\n",
        "Busiest debit month:",
        format_month(summary.busiest_debit_month)
    ));

    let types = if summary.unique_types.is_empty() {
        "(none)".to_string()
    } else {
        summary.unique_types.join(", ")
    };
    output.push_str(&format!("{:<22}{}\n", "Types:", types));

    output
}
