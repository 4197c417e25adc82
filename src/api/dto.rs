//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::task::domain::{Priority, Task, TaskDomainError};

/// Task as returned by the API: the persisted fields plus the overdue flag.
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    /// Persisted task fields.
    #[serde(flatten)]
    pub task: Task,
    /// Whether the task is currently overdue.
    pub is_overdue: bool,
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Optional `YYYY-MM-DD` due date.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Optional priority number or name.
    #[serde(default)]
    pub priority: Option<PriorityInput>,
}

/// Body of `PUT /tasks/{id}`; missing or empty fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTaskRequest {
    /// New title.
    pub title: String,
    /// New description.
    pub description: String,
}

/// Body of `PATCH /tasks/{id}/due-date`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetDueDateRequest {
    /// `YYYY-MM-DD` due date, or an empty string to clear it.
    pub due_date: String,
}

/// Body of `PATCH /tasks/{id}/priority`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetPriorityRequest {
    /// Priority number or name.
    pub priority: PriorityInput,
}

/// Priority given either as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PriorityInput {
    /// Numeric priority, validated against `1..=5`.
    Number(i64),
    /// Number text or a priority name such as `high`.
    Text(String),
}

impl PriorityInput {
    /// Resolves the input to a validated priority.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskDomainError`] when the value is out of range or not a
    /// known priority name.
    pub fn resolve(&self) -> Result<Priority, TaskDomainError> {
        match self {
            Self::Number(value) => Priority::new(*value),
            Self::Text(text) => text.parse(),
        }
    }
}

/// Query parameters accepted by `GET /tasks`.
///
/// Only the literal values `true` and `false` select a filter; anything
/// else lists every task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// `true` lists completed tasks, `false` pending ones.
    pub completed: Option<String>,
    /// `true` lists overdue tasks.
    pub overdue: Option<String>,
    /// Ordering of the result.
    pub sort: Option<ListSort>,
}

/// Orderings accepted by `GET /tasks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSort {
    /// Most urgent first.
    Priority,
    /// Earliest due date first, undated last.
    DueDate,
}
