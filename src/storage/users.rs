//! User repository for CSV storage
//!
//! Holds all registered users keyed by username, mirrored to `users.csv`.
//! Registration appends a single line rather than rewriting the file;
//! existing lines never change, so the append is safe and cheap.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};
use crate::models::User;

use super::file_io::{append_record, read_records};
use super::LoadOutcome;

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    /// username -> user
    data: RwLock<HashMap<String, User>>,
}

impl UserRepository {
    /// Create a new user repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk, replacing the in-memory map
    ///
    /// Missing file reads as no users; malformed lines are dropped and
    /// counted in the outcome.
    pub fn load(&self) -> TrackerResult<LoadOutcome> {
        let (records, skipped) = read_records::<User, _>(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        let loaded = records.len();
        for user in records {
            data.insert(user.username.clone(), user);
        }

        Ok(LoadOutcome { loaded, skipped })
    }

    /// Check whether a username is already registered
    pub fn username_exists(&self, username: &str) -> TrackerResult<bool> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(username))
    }

    /// Look up a user by username
    pub fn get_by_username(&self, username: &str) -> TrackerResult<Option<User>> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(username).cloned())
    }

    /// Add a user to the in-memory map and append it to the backing file
    pub fn insert(&self, user: User) -> TrackerResult<()> {
        append_record(&self.path, &user)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(user.username.clone(), user);
        Ok(())
    }

    /// Count registered users
    pub fn count(&self) -> TrackerResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
