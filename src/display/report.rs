//! Category report formatting

use std::fmt::Write;

use crate::reports::CategoryReport;

/// Render a spending-by-category report for the terminal
pub fn format_category_report(report: &CategoryReport) -> String {
    if report.is_empty() {
        return "No expenses to report.".to_string();
    }

    let mut out = String::new();
    out.push_str("--- Spending by Category ---\n");

    for entry in &report.entries {
        let _ = write!(out, "{}: {}", entry.category, entry.total);
        if let Some(status) = entry.status {
            let _ = write!(out, " [{}]", status);
        }
        out.push('\n');
    }

    out.push_str("----------------------------");
    out
}
