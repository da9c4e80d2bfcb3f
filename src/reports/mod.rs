//! Reports for spendtrack
//!
//! Read-only derivations over expense records.

pub mod category;

pub use category::{budget_threshold, BudgetStatus, CategoryReport, CategoryTotal};
