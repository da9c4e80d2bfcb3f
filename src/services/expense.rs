//! Expense service
//!
//! Owner-scoped CRUD over expense records. Every operation takes the owner
//! ID explicitly; the service never consults session state. Edit and delete
//! match on both the record ID and the owner and report a single `false`
//! outcome for "not found" and "not yours" alike, so the existence of other
//! users' records is never revealed.
//!
//! Mutations apply to the in-memory collection first and then persist the
//! full collection. A failed persist is returned as an error but the
//! in-memory change stands; callers must not assume the file was updated
//! just because the collection was.

use chrono::NaiveDate;

use crate::audit::{AuditAction, AuditEntry};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId, Money, UserId};
use crate::storage::{ExpenseUpdate, Storage};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new expense for an owner
    ///
    /// The shell validates input up front, but the amount and category
    /// invariants are re-checked here since they are store invariants, not
    /// presentation concerns.
    pub fn add(
        &self,
        owner_id: UserId,
        date: NaiveDate,
        category: &str,
        amount: Money,
        description: &str,
    ) -> TrackerResult<Expense> {
        let expense = Expense::new(owner_id, date, category, amount, description);
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_audit(AuditEntry::new(
            Some(owner_id),
            AuditAction::ExpenseAdded,
            expense.id.to_string(),
            format!("{} {}", expense.category, expense.amount),
        ));

        Ok(expense)
    }

    /// List all expenses belonging to an owner, in insertion order
    pub fn list_by_owner(&self, owner_id: UserId) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.list_by_owner(owner_id)
    }

    /// Edit an expense's date, category, amount, and description
    ///
    /// Returns `Ok(false)` when the ID does not exist or belongs to a
    /// different owner; the two cases are deliberately indistinguishable.
    /// The ID and owner of a record never change.
    pub fn edit(
        &self,
        id: ExpenseId,
        owner_id: UserId,
        date: NaiveDate,
        category: &str,
        amount: Money,
        description: &str,
    ) -> TrackerResult<bool> {
        Expense::validate_fields(category, amount)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let update = ExpenseUpdate {
            date,
            category: category.to_string(),
            amount,
            description: description.to_string(),
        };

        if !self.storage.expenses.update_owned(id, owner_id, update)? {
            return Ok(false);
        }

        self.storage.expenses.save()?;

        self.storage.log_audit(AuditEntry::new(
            Some(owner_id),
            AuditAction::ExpenseEdited,
            id.to_string(),
            format!("{} {}", category, amount),
        ));

        Ok(true)
    }

    /// Delete an expense
    ///
    /// Same conflated not-found/not-authorized semantics as [`edit`](Self::edit).
    pub fn delete(&self, id: ExpenseId, owner_id: UserId) -> TrackerResult<bool> {
        if !self.storage.expenses.remove_owned(id, owner_id)? {
            return Ok(false);
        }

        self.storage.expenses.save()?;

        self.storage.log_audit(AuditEntry::new(
            Some(owner_id),
            AuditAction::ExpenseDeleted,
            id.to_string(),
            String::new(),
        ));

        Ok(true)
    }
}
