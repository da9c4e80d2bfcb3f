//! Service layer for spendtrack
//!
//! The service layer provides business logic on top of the storage layer:
//! defensive validation, owner scoping, persistence, and audit logging.

pub mod auth;
pub mod expense;

pub use auth::AuthService;
pub use expense::ExpenseService;
