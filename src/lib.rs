//! spendtrack - flat-file personal expense tracker
//!
//! A single-user-at-a-time expense tracker: register or log in, then record
//! dated expenses tagged with a category and amount, and review spending by
//! category against fixed budget thresholds. All state lives in flat CSV
//! files under a single data directory.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: data directory and file path management
//! - `error`: custom error types
//! - `models`: core data models (users, expenses, money)
//! - `validation`: leaf input validation helpers
//! - `storage`: CSV file storage layer
//! - `services`: business logic layer (auth, expense CRUD)
//! - `reports`: spending aggregation against budget thresholds
//! - `audit`: append-only audit logging
//! - `display`: terminal output formatting
//! - `shell`: interactive menu loop

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;
pub mod validation;

pub use error::{TrackerError, TrackerResult};
