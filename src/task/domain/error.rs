//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating task input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty.
    #[error("title cannot be empty")]
    EmptyTitle,

    /// The priority lies outside the accepted range.
    #[error("invalid priority {0}, it should be between 1 and 5")]
    InvalidPriority(i64),

    /// The priority text is neither a number nor a known priority name.
    #[error(
        "invalid priority '{0}', use a number between 1 and 5 or one of: highest, high, medium, low, lowest"
    )]
    InvalidPriorityText(String),

    /// The due date text is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', please use YYYY-MM-DD")]
    InvalidDueDate(String),

    /// Every task identifier has been handed out.
    #[error("no task identifiers left to assign")]
    IdsExhausted,

    /// The task identifier text is not a positive integer.
    #[error("invalid task ID '{0}'")]
    InvalidTaskId(String),
}
