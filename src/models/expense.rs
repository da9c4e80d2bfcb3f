//! Expense record model
//!
//! One expense entry: a dated, categorized amount belonging to a single user.
//! Field declaration order matches the column order of `expenses.csv`
//! (`id,owner_id,date,category,amount,description`), so the serde derives
//! drive the CSV layout directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, UserId};
use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, immutable after creation
    pub id: ExpenseId,

    /// The user this expense belongs to, immutable after creation
    pub owner_id: UserId,

    /// Date of the expense
    pub date: NaiveDate,

    /// Category (e.g. Food, Travel); free text, case-sensitive
    pub category: String,

    /// Amount spent, strictly positive
    pub amount: Money,

    /// Free-text description
    pub description: String,
}

impl Expense {
    /// Create a new expense with a fresh random ID
    pub fn new(
        owner_id: UserId,
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            owner_id,
            date,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Check if this expense belongs to the given user
    pub fn is_owned_by(&self, owner_id: UserId) -> bool {
        self.owner_id == owner_id
    }

    /// Validate the expense invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        Self::validate_fields(&self.category, self.amount)
    }

    /// Validate the mutable-field invariants, shared by create and edit
    pub fn validate_fields(category: &str, amount: Money) -> Result<(), ExpenseValidationError> {
        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }
        if category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_owner() -> UserId {
        UserId::new()
    }

    #[test]
    fn test_new_expense() {
        let owner = test_owner();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let expense = Expense::new(owner, date, "Food", Money::from_cents(1250), "lunch");

        assert_eq!(expense.owner_id, owner);
        assert_eq!(expense.date, date);
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount.cents(), 1250);
        assert!(expense.is_owned_by(owner));
        assert!(!expense.is_owned_by(UserId::new()));
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let owner = test_owner();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let a = Expense::new(owner, date, "Food", Money::from_cents(100), "");
        let b = Expense::new(owner, date, "Food", Money::from_cents(100), "");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_validate() {
        let owner = test_owner();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        let ok = Expense::new(owner, date, "Food", Money::from_cents(100), "");
        assert!(ok.validate().is_ok());

        let zero = Expense::new(owner, date, "Food", Money::zero(), "");
        assert!(matches!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        let blank = Expense::new(owner, date, "  ", Money::from_cents(100), "");
        assert_eq!(blank.validate(), Err(ExpenseValidationError::EmptyCategory));
    }

    #[test]
    fn test_display() {
        let owner = test_owner();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let expense = Expense::new(owner, date, "Food", Money::from_cents(1250), "lunch");

        let rendered = expense.to_string();
        assert!(rendered.contains("2025-03-14"));
        assert!(rendered.contains("Food"));
        assert!(rendered.contains("$12.50"));
    }
}
