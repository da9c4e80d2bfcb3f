//! Audit entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// The kind of operation being audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    UserRegistered,
    UserLoggedIn,
    ExpenseAdded,
    ExpenseEdited,
    ExpenseDeleted,
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation happened
    pub timestamp: DateTime<Utc>,

    /// The user performing the operation, if authenticated
    pub actor: Option<UserId>,

    /// What happened
    pub action: AuditAction,

    /// Identifier of the affected entity (expense ID, username, ...)
    pub entity_id: String,

    /// Human-readable context
    #[serde(default)]
    pub detail: String,
}

impl AuditEntry {
    /// Create an entry timestamped now
    pub fn new(
        actor: Option<UserId>,
        action: AuditAction,
        entity_id: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            actor,
            action,
            entity_id: entity_id.into(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_to_single_json_line() {
        let entry = AuditEntry::new(
            Some(UserId::new()),
            AuditAction::ExpenseAdded,
            "some-id",
            "Food $12.50",
        );

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("expense_added"));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.action, AuditAction::ExpenseAdded);
        assert_eq!(back.entity_id, "some-id");
    }
}
