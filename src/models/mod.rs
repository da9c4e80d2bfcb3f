//! Core data models for spendtrack
//!
//! Contains the data structures that represent the expense-tracking domain:
//! users, sessions, expense records, and monetary amounts.

pub mod expense;
pub mod ids;
pub mod money;
pub mod user;

pub use expense::Expense;
pub use ids::{ExpenseId, UserId};
pub use money::Money;
pub use user::{Session, User};
