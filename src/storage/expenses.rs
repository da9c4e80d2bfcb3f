//! Expense repository for CSV storage
//!
//! The authoritative in-memory collection of expense records, mirrored to
//! `expenses.csv`. Records are kept in insertion order in a `Vec`; every
//! mutation rewrites the whole file through the atomic writer. All
//! owner-scoped operations match on both the record ID and the owner, and
//! report a plain `false` for "no such record" and "someone else's record"
//! alike, so one user can never probe for another user's record IDs.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId, Money, UserId};

use super::file_io::{read_records, write_records_atomic};
use super::LoadOutcome;

/// Replacement values applied to an expense by an edit
///
/// The record ID and owner are deliberately absent; both are immutable.
#[derive(Debug, Clone)]
pub struct ExpenseUpdate {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    pub description: String,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk, replacing the in-memory collection
    ///
    /// A missing file loads as an empty collection. Lines that do not parse
    /// as a six-field expense record are dropped; the returned outcome
    /// carries the skip count so callers can warn about degraded loads.
    pub fn load(&self) -> TrackerResult<LoadOutcome> {
        let (records, skipped) = read_records::<Expense, _>(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let loaded = records.len();
        *data = records;

        Ok(LoadOutcome { loaded, skipped })
    }

    /// Save the full collection to disk
    pub fn save(&self) -> TrackerResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_records_atomic(&self.path, &data)
    }

    /// Append an expense to the in-memory collection
    pub fn insert(&self, expense: Expense) -> TrackerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(expense);
        Ok(())
    }

    /// Get all expenses belonging to an owner, in insertion order
    pub fn list_by_owner(&self, owner_id: UserId) -> TrackerResult<Vec<Expense>> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|e| e.is_owned_by(owner_id))
            .cloned()
            .collect())
    }

    /// Overwrite the mutable fields of the record matching BOTH id and owner
    ///
    /// Returns `Ok(false)` when no record matches; a wrong owner and an
    /// unknown ID are indistinguishable to the caller.
    pub fn update_owned(
        &self,
        id: ExpenseId,
        owner_id: UserId,
        update: ExpenseUpdate,
    ) -> TrackerResult<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data
            .iter_mut()
            .find(|e| e.id == id && e.is_owned_by(owner_id))
        {
            Some(expense) => {
                expense.date = update.date;
                expense.category = update.category;
                expense.amount = update.amount;
                expense.description = update.description;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record matching BOTH id and owner
    ///
    /// Same conflated not-found semantics as [`update_owned`](Self::update_owned).
    pub fn remove_owned(&self, id: ExpenseId, owner_id: UserId) -> TrackerResult<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|e| !(e.id == id && e.is_owned_by(owner_id)));
        Ok(data.len() < before)
    }

    /// Count all expenses across all owners
    pub fn count(&self) -> TrackerResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn sample(owner: UserId, category: &str, cents: i64) -> Expense {
        Expense::new(
            owner,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            category,
            Money::from_cents(cents),
            "test expense",
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        let outcome = repo.load().unwrap();
        assert_eq!(outcome.loaded, 0);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_and_list_preserves_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();
        let owner = UserId::new();

        let first = sample(owner, "Food", 100);
        let second = sample(owner, "Travel", 200);
        repo.insert(first.clone()).unwrap();
        repo.insert(second.clone()).unwrap();

        let listed = repo.list_by_owner(owner).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    #[test]
    fn test_list_is_owner_scoped() {
        let (_temp_dir, repo) = create_test_repo();
        let alice = UserId::new();
        let bob = UserId::new();

        repo.insert(sample(alice, "Food", 100)).unwrap();
        repo.insert(sample(bob, "Food", 200)).unwrap();
        repo.insert(sample(alice, "Travel", 300)).unwrap();

        let alice_expenses = repo.list_by_owner(alice).unwrap();
        assert_eq!(alice_expenses.len(), 2);
        assert!(alice_expenses.iter().all(|e| e.is_owned_by(alice)));

        assert_eq!(repo.list_by_owner(bob).unwrap().len(), 1);
    }

    #[test]
    fn test_update_owned_wrong_owner_fails_unchanged() {
        let (_temp_dir, repo) = create_test_repo();
        let alice = UserId::new();
        let bob = UserId::new();

        let expense = sample(alice, "Food", 100);
        let id = expense.id;
        repo.insert(expense).unwrap();

        let update = ExpenseUpdate {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            category: "Hacked".into(),
            amount: Money::from_cents(1),
            description: String::new(),
        };

        assert!(!repo.update_owned(id, bob, update.clone()).unwrap());
        assert!(!repo.update_owned(ExpenseId::new(), alice, update).unwrap());

        let unchanged = &repo.list_by_owner(alice).unwrap()[0];
        assert_eq!(unchanged.category, "Food");
        assert_eq!(unchanged.amount.cents(), 100);
    }

    #[test]
    fn test_update_owned_keeps_id_and_owner() {
        let (_temp_dir, repo) = create_test_repo();
        let owner = UserId::new();

        let expense = sample(owner, "Food", 100);
        let id = expense.id;
        repo.insert(expense).unwrap();

        let updated = repo
            .update_owned(
                id,
                owner,
                ExpenseUpdate {
                    date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
                    category: "Travel".into(),
                    amount: Money::from_cents(999),
                    description: "train ticket".into(),
                },
            )
            .unwrap();
        assert!(updated);

        let after = &repo.list_by_owner(owner).unwrap()[0];
        assert_eq!(after.id, id);
        assert_eq!(after.owner_id, owner);
        assert_eq!(after.category, "Travel");
        assert_eq!(after.amount.cents(), 999);
        assert_eq!(after.description, "train ticket");
    }

    #[test]
    fn test_remove_owned() {
        let (_temp_dir, repo) = create_test_repo();
        let alice = UserId::new();
        let bob = UserId::new();

        let expense = sample(alice, "Food", 100);
        let id = expense.id;
        repo.insert(expense).unwrap();

        // Wrong owner cannot delete
        assert!(!repo.remove_owned(id, bob).unwrap());
        assert_eq!(repo.count().unwrap(), 1);

        assert!(repo.remove_owned(id, alice).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.list_by_owner(alice).unwrap().is_empty());

        // Deleting an absent record reports failure, not an error
        assert!(!repo.remove_owned(id, alice).unwrap());
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let (temp_dir, repo) = create_test_repo();
        let owner = UserId::new();

        let expense = Expense::new(
            owner,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            "Food",
            Money::from_cents(1250),
            "dinner, drinks",
        );
        let id = expense.id;
        repo.insert(expense).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.csv"));
        let outcome = repo2.load().unwrap();
        assert_eq!(outcome.loaded, 1);
        assert_eq!(outcome.skipped, 0);

        let reloaded = &repo2.list_by_owner(owner).unwrap()[0];
        assert_eq!(reloaded.id, id);
        assert_eq!(reloaded.category, "Food");
        assert_eq!(reloaded.amount.cents(), 1250);
        // Description containing the delimiter survives the roundtrip
        assert_eq!(reloaded.description, "dinner, drinks");
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let (temp_dir, repo) = create_test_repo();
        let owner = UserId::new();

        repo.insert(sample(owner, "Food", 1250)).unwrap();
        repo.save().unwrap();

        // Corrupt the file with a short line and a bad amount
        let path = temp_dir.path().join("expenses.csv");
        let mut contents = std::fs::read_to_string(&path).unwrap();
        contents.push_str("only,three,fields\n");
        contents.push_str(&format!(
            "{},{},2025-02-01,Food,not-a-number,junk\n",
            ExpenseId::new(),
            owner
        ));
        std::fs::write(&path, contents).unwrap();

        let outcome = repo.load().unwrap();
        assert_eq!(outcome.loaded, 1);
        assert_eq!(outcome.skipped, 2);
        assert!(outcome.is_degraded());
    }
}
