//! Configuration for spendtrack
//!
//! Currently limited to data directory and file path management.

pub mod paths;

pub use paths::DataPaths;
