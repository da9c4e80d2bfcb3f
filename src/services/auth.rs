//! Authentication service
//!
//! Registration and login against the user repository. A successful login
//! yields an explicit [`Session`] value; there is no process-wide
//! "current user" state anywhere in the library.

use crate::audit::{AuditAction, AuditEntry};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Session, User};
use crate::storage::Storage;

/// Service for user registration and authentication
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    ///
    /// Usernames and passwords are trimmed and must be non-empty; usernames
    /// must be unique. The new user is appended to the backing file.
    pub fn register(&self, username: &str, password: &str) -> TrackerResult<User> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() {
            return Err(TrackerError::Validation("Username cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(TrackerError::Validation("Password cannot be empty".into()));
        }

        if self.storage.users.username_exists(username)? {
            return Err(TrackerError::username_taken(username));
        }

        let user = User::new(username, password);
        self.storage.users.insert(user.clone())?;

        self.storage.log_audit(AuditEntry::new(
            Some(user.id),
            AuditAction::UserRegistered,
            username,
            String::new(),
        ));

        Ok(user)
    }

    /// Authenticate a user
    ///
    /// Returns `Ok(None)` for an unknown username or a wrong password;
    /// the two cases are not distinguished.
    pub fn login(&self, username: &str, password: &str) -> TrackerResult<Option<Session>> {
        let user = match self.storage.users.get_by_username(username.trim())? {
            Some(user) => user,
            None => return Ok(None),
        };

        if user.password != password {
            return Ok(None);
        }

        self.storage.log_audit(AuditEntry::new(
            Some(user.id),
            AuditAction::UserLoggedIn,
            user.username.clone(),
            String::new(),
        ));

        Ok(Some(Session::for_user(&user)))
    }
}
