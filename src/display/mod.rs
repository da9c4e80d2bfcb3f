//! Terminal output formatting for spendtrack

pub mod expense;
pub mod report;

pub use expense::format_expense_table;
pub use report::format_category_report;
