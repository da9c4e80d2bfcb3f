//! Storage layer for spendtrack
//!
//! Flat CSV file storage with atomic rewrites. Each repository owns the
//! in-memory collection for one entity type; the files on disk are mirrors,
//! rewritten (expenses) or appended to (users) on mutation.

pub mod expenses;
pub mod file_io;
pub mod users;

pub use expenses::{ExpenseRepository, ExpenseUpdate};
pub use file_io::{append_record, read_records, write_records_atomic};
pub use users::UserRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::DataPaths;
use crate::error::TrackerResult;

/// Result of loading a backing file
///
/// Lines that fail to parse are dropped rather than aborting the load, but
/// the count is surfaced so callers can tell a clean load from a degraded
/// one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Number of records successfully loaded
    pub loaded: usize,
    /// Number of malformed lines dropped
    pub skipped: usize,
}

impl LoadOutcome {
    /// True if any lines were dropped during the load
    pub fn is_degraded(&self) -> bool {
        self.skipped > 0
    }

    /// Combine two outcomes
    pub fn combine(self, other: LoadOutcome) -> LoadOutcome {
        LoadOutcome {
            loaded: self.loaded + other.loaded,
            skipped: self.skipped + other.skipped,
        }
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: DataPaths,
    pub users: UserRepository,
    pub expenses: ExpenseRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: DataPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Record an audit entry, ignoring write failures
    ///
    /// The audit log is advisory; a full disk must not fail the operation
    /// being audited.
    pub fn log_audit(&self, entry: AuditEntry) {
        let _ = self.audit.log(&entry);
    }

    /// Load all data from disk
    pub fn load_all(&self) -> TrackerResult<LoadOutcome> {
        let users = self.users.load()?;
        let expenses = self.expenses.load()?;
        Ok(users.combine(expenses))
    }
}
