//! Path management for spendtrack
//!
//! All persistent state lives under a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory passed on the command line (`--data-dir`)
//! 2. `SPENDTRACK_DATA_DIR` environment variable (if set)
//! 3. `./data` relative to the working directory

use std::path::PathBuf;

use crate::error::TrackerError;

/// Default data directory, relative to the working directory
const DEFAULT_DATA_DIR: &str = "data";

/// Manages all paths used by spendtrack
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Base directory for all spendtrack data
    base_dir: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths instance using the environment override or the
    /// `./data` default.
    pub fn new() -> Self {
        let base_dir = match std::env::var("SPENDTRACK_DATA_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
        };
        Self { base_dir }
    }

    /// Create DataPaths with an explicit base directory (CLI override, tests)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base data directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to expenses.csv
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Get the path to users.csv
    pub fn users_file(&self) -> PathBuf {
        self.base_dir.join("users.csv")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new()
    }
}
