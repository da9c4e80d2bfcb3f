//! Spending-by-category report
//!
//! Groups a set of expense records by exact (case-sensitive) category
//! string, sums the amounts, and annotates each total against a fixed
//! per-category budget threshold. Thresholds are advisory labels on the
//! report, never enforced as limits.

use std::collections::HashMap;
use std::fmt;

use crate::models::{Expense, Money};

/// Fixed per-category budget thresholds
const BUDGET_THRESHOLDS: [(&str, Money); 4] = [
    ("Food", Money::from_units_cents(500, 0)),
    ("Travel", Money::from_units_cents(200, 0)),
    ("Utilities", Money::from_units_cents(150, 0)),
    ("Entertainment", Money::from_units_cents(100, 0)),
];

/// Look up the budget threshold for a category, if one is defined
pub fn budget_threshold(category: &str) -> Option<Money> {
    BUDGET_THRESHOLDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, threshold)| *threshold)
}

/// How a category total compares to its budget threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Total <= threshold
    Within { threshold: Money },
    /// Total > threshold (strictly)
    Over { threshold: Money },
}

impl BudgetStatus {
    /// Classify a total against a threshold
    ///
    /// A total exactly at the threshold is within budget; only strictly
    /// exceeding it is flagged.
    pub fn classify(total: Money, threshold: Money) -> Self {
        if total > threshold {
            Self::Over { threshold }
        } else {
            Self::Within { threshold }
        }
    }

    /// True if the category exceeded its threshold
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Over { .. })
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Within { threshold } => write!(f, "within budget of {}", threshold),
            Self::Over { threshold } => write!(f, "OVER budget of {}", threshold),
        }
    }
}

/// Total spend for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name, exactly as recorded on the expenses
    pub category: String,
    /// Sum of all amounts in this category
    pub total: Money,
    /// Budget classification; absent for categories without a threshold
    pub status: Option<BudgetStatus>,
}

/// A spending-by-category report
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    /// One entry per distinct category, sorted by category name
    pub entries: Vec<CategoryTotal>,
}

impl CategoryReport {
    /// Generate a report over a set of expense records
    ///
    /// Amounts are summed in integer cents, clamping at the i64 bounds, so
    /// floating-point drift is impossible and oversized records loaded from
    /// disk cannot overflow a total. Entry order is sorted by category name
    /// purely for stable display.
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut totals: HashMap<&str, Money> = HashMap::new();
        for expense in expenses {
            *totals.entry(expense.category.as_str()).or_default() += expense.amount;
        }

        let mut entries: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total,
                status: budget_threshold(category)
                    .map(|threshold| BudgetStatus::classify(total, threshold)),
            })
            .collect();
        entries.sort_by(|a, b| a.category.cmp(&b.category));

        Self { entries }
    }

    /// True if no expenses were aggregated
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a category
    pub fn entry(&self, category: &str) -> Option<&CategoryTotal> {
        self.entries.iter().find(|e| e.category == category)
    }
}
