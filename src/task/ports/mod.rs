//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod storage;

pub use storage::{TaskStorage, TaskStorageError, TaskStorageResult};

#[cfg(test)]
pub use storage::MockTaskStorage;
