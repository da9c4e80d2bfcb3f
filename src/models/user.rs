//! User and session models
//!
//! Credentials are stored as plain text in `users.csv`; hashing is out of
//! scope for this tool. Field order matches the file columns
//! (`id,username,password`).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Login name, unique across users
    pub username: String,

    /// Plain-text password
    pub password: String,
}

impl User {
    /// Create a new user with a fresh random ID
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.id)
    }
}

/// An authenticated session
///
/// Returned by a successful login and held by the shell. Services never read
/// session state implicitly; the owner ID is always passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The authenticated user's ID
    pub user_id: UserId,

    /// The authenticated user's name, for display
    pub username: String,
}

impl Session {
    /// Create a session for a user
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
        }
    }
}
