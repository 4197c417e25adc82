//! Application services for task lifecycle orchestration.

mod ordering;
mod registry;

pub use ordering::{sort_by_due_date, sort_by_priority};
pub use registry::{ErrorKind, TaskRegistry, TaskRegistryError, TaskRegistryResult, TaskStats};
