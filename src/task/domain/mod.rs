//! Domain model for task lifecycle management.
//!
//! The task domain holds the task record, its field-level invariants and
//! the parsing rules for user-supplied values, keeping persistence and
//! presentation outside the domain boundary.

mod error;
mod ids;
mod priority;
mod schedule;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use priority::Priority;
pub use schedule::{DUE_DATE_FORMAT, parse_due_date, zero_time};
pub use task::{Task, TaskDetail, TaskSummary, format_task_list};
