//! Task entity and its read-only projections.

use super::{Priority, TaskDomainError, TaskId, schedule::zero_time, schedule::zero_time_option};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    completed: bool,
    created_at: DateTime<Utc>,
    #[serde(default, with = "zero_time_option")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default, with = "zero_time_option")]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    priority: Priority,
}

impl Task {
    /// Creates a pending task with medium priority, stamped with the
    /// clock's current time.
    ///
    /// Title validation is the registry's responsibility.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: clock.utc(),
            completed_at: None,
            due_date: None,
            priority: Priority::default(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, which may be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the last completion-state change, if any.
    ///
    /// Only authoritative while the task is completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the due date, if one is set.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Marks the task completed at the clock's current time.
    pub fn mark_complete(&mut self, clock: &impl Clock) {
        self.completed = true;
        self.completed_at = Some(clock.utc());
    }

    /// Marks the task pending again.
    ///
    /// `completed_at` is restamped with the current time rather than
    /// cleared.
    pub fn mark_incomplete(&mut self, clock: &impl Clock) {
        self.completed = false;
        self.completed_at = Some(clock.utc());
    }

    /// Overwrites the due date; `None` clears it.
    pub const fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    /// Sets the priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] when `priority` lies
    /// outside `1..=5`; the current priority is left untouched.
    pub fn set_priority(&mut self, priority: i64) -> Result<(), TaskDomainError> {
        self.priority = Priority::new(priority)?;
        Ok(())
    }

    /// Reports whether the task counts as overdue.
    ///
    /// The predicate holds when the task has no due date, the current time
    /// is after the zero-time sentinel standing in for that absent date,
    /// and the task is not completed. A task with a due date set never
    /// reports overdue.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        let effective_due = self.due_date.unwrap_or_else(zero_time);
        self.due_date.is_none() && clock.utc() > effective_due && !self.completed
    }

    /// Returns the one-line summary projection.
    #[must_use]
    pub const fn summary(&self) -> TaskSummary<'_> {
        TaskSummary(self)
    }

    /// Returns the multi-line detail projection.
    #[must_use]
    pub const fn detail(&self) -> TaskDetail<'_> {
        TaskDetail(self)
    }
}

/// One-line view: completion marker, id, title, due date when set and
/// priority label when not medium.
#[derive(Debug, Clone, Copy)]
pub struct TaskSummary<'a>(&'a Task);

impl fmt::Display for TaskSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.0;
        let marker = if task.completed { "[x]" } else { "[ ]" };
        write!(f, "{marker} {} {}", task.id, task.title)?;
        if let Some(due) = task.due_date {
            write!(f, " Due: {}", due.format(DATE_DISPLAY_FORMAT))?;
        }
        if !task.priority.is_default() {
            write!(f, " - Priority: {}", task.priority)?;
        }
        Ok(())
    }
}

/// Multi-line view listing every field.
#[derive(Debug, Clone, Copy)]
pub struct TaskDetail<'a>(&'a Task);

impl fmt::Display for TaskDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.0;
        let status = if task.completed { "Completed" } else { "Pending" };
        writeln!(f, "ID: {}", task.id)?;
        writeln!(f, "Title: {}", task.title)?;
        writeln!(f, "Description: {}", task.description)?;
        writeln!(f, "Status: {status}")?;
        writeln!(f, "Created: {}", task.created_at.format(TIMESTAMP_DISPLAY_FORMAT))?;
        match task.completed_at {
            Some(at) => writeln!(f, "Completed: {}", at.format(TIMESTAMP_DISPLAY_FORMAT))?,
            None => writeln!(f, "Completed: -")?,
        }
        match task.due_date {
            Some(due) => writeln!(f, "Due: {}", due.format(DATE_DISPLAY_FORMAT))?,
            None => writeln!(f, "Due: -")?,
        }
        write!(f, "Priority: {}", task.priority)
    }
}

/// Formats a task list, one summary per line or detail blocks separated by
/// blank lines.
#[must_use]
pub fn format_task_list(tasks: &[Task], detailed: bool) -> String {
    if tasks.is_empty() {
        return "No tasks available.".to_owned();
    }
    let separator = if detailed { "\n\n" } else { "\n" };
    tasks
        .iter()
        .map(|task| {
            if detailed {
                task.detail().to_string()
            } else {
                task.summary().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}
