//! Audit logging for spendtrack
//!
//! Every mutating operation (registration, login, expense CRUD) is recorded
//! as one JSON line in an append-only log file. The log is advisory: a
//! failed audit write never fails the operation being audited.

pub mod entry;
pub mod logger;

pub use entry::{AuditAction, AuditEntry};
pub use logger::AuditLogger;
