//! Task registry: the in-memory task set, id assignment and every
//! lifecycle operation.
//!
//! Each mutating operation persists the full set through the storage port
//! before returning. When that save fails the in-memory change is kept and
//! the failure is reported, so memory and storage diverge until the next
//! successful save.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::{TaskStorage, TaskStorageError},
};

/// Registry-level errors.
///
/// Every registry operation fails with exactly one of these three kinds.
#[derive(Debug, Error)]
pub enum TaskRegistryError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task with the identifier exists.
    #[error("task with ID {0} not found")]
    NotFound(TaskId),

    /// Loading or saving through the storage port failed.
    #[error(transparent)]
    Storage(#[from] TaskStorageError),
}

/// Coarse category of a [`TaskRegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input.
    Validation,
    /// Unknown task identifier.
    NotFound,
    /// Persistence failure.
    Storage,
}

impl TaskRegistryError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Result type for task registry operations.
pub type TaskRegistryResult<T> = Result<T, TaskRegistryError>;

/// Aggregate counts over the live task set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of pending tasks.
    pub pending: usize,
    /// Number of overdue tasks.
    pub overdue: usize,
}

/// Owner of the task set and its id counter.
pub struct TaskRegistry<S, C>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    storage: S,
    clock: Arc<C>,
    tasks: Vec<Task>,
    next_id: Option<TaskId>,
}

impl<S, C> TaskRegistry<S, C>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    /// Creates a registry populated from `storage`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Storage`] when the initial load fails;
    /// no registry is produced in that case.
    pub fn new(storage: S, clock: Arc<C>) -> TaskRegistryResult<Self> {
        let mut registry = Self {
            storage,
            clock,
            tasks: Vec::new(),
            next_id: Some(TaskId::FIRST),
        };
        registry.reload()?;
        Ok(registry)
    }

    /// Replaces the in-memory set with the persisted one and recomputes the
    /// next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Storage`] when loading fails; the
    /// current state is kept in that case.
    pub fn reload(&mut self) -> TaskRegistryResult<()> {
        let tasks = self.storage.load()?;
        self.next_id = tasks
            .iter()
            .map(Task::id)
            .max()
            .map_or(Some(TaskId::FIRST), TaskId::next);
        self.tasks = tasks;
        debug!(count = self.tasks.len(), next_id = ?self.next_id, "task registry loaded");
        Ok(())
    }

    /// Persists the current task set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Storage`] when the save fails.
    pub fn save(&self) -> TaskRegistryResult<()> {
        self.storage.save(&self.tasks).map_err(|err| {
            warn!(error = %err, "failed to save tasks");
            TaskRegistryError::from(err)
        })
    }

    /// Returns the identifier the next added task will receive, or `None`
    /// when no identifiers are left.
    #[must_use]
    pub const fn next_id(&self) -> Option<TaskId> {
        self.next_id
    }

    /// Returns the number of live tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the registry holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Evaluates the overdue predicate for `task` against the registry clock.
    #[must_use]
    pub fn is_overdue(&self, task: &Task) -> bool {
        task.is_overdue(&*self.clock)
    }

    /// Adds a pending task with medium priority and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Validation`] when `title` is empty or no
    /// identifiers are left, in which case nothing changes, or
    /// [`TaskRegistryError::Storage`] when the save fails.
    pub fn add(&mut self, title: &str, description: &str) -> TaskRegistryResult<Task> {
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle.into());
        }
        let id = self.next_id.ok_or(TaskDomainError::IdsExhausted)?;
        let task = Task::new(id, title, description, &*self.clock);
        self.tasks.push(task.clone());
        self.next_id = id.next();

        self.save()?;
        debug!(task_id = %task.id(), "task added");
        Ok(task)
    }

    /// Looks up a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] for an unknown identifier.
    pub fn get(&self, id: TaskId) -> TaskRegistryResult<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id() == id)
            .ok_or(TaskRegistryError::NotFound(id))
    }

    /// Updates the title and description; an empty argument leaves that
    /// field unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] or
    /// [`TaskRegistryError::Storage`].
    pub fn update(&mut self, id: TaskId, title: &str, description: &str) -> TaskRegistryResult<()> {
        let task = find_mut(&mut self.tasks, id)?;
        if !title.is_empty() {
            task.set_title(title);
        }
        if !description.is_empty() {
            task.set_description(description);
        }
        self.persist(id, "task updated")
    }

    /// Removes a task. Its identifier is never handed out again.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] or
    /// [`TaskRegistryError::Storage`].
    pub fn delete(&mut self, id: TaskId) -> TaskRegistryResult<()> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(TaskRegistryError::NotFound(id))?;
        self.tasks.remove(position);
        self.persist(id, "task deleted")
    }

    /// Marks a task completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] or
    /// [`TaskRegistryError::Storage`].
    pub fn mark_complete(&mut self, id: TaskId) -> TaskRegistryResult<()> {
        find_mut(&mut self.tasks, id)?.mark_complete(&*self.clock);
        self.persist(id, "task completed")
    }

    /// Marks a task pending again.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] or
    /// [`TaskRegistryError::Storage`].
    pub fn mark_incomplete(&mut self, id: TaskId) -> TaskRegistryResult<()> {
        find_mut(&mut self.tasks, id)?.mark_incomplete(&*self.clock);
        self.persist(id, "task reopened")
    }

    /// Sets or, with `None`, clears a task's due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] or
    /// [`TaskRegistryError::Storage`].
    pub fn set_due_date(
        &mut self,
        id: TaskId,
        due_date: Option<DateTime<Utc>>,
    ) -> TaskRegistryResult<()> {
        find_mut(&mut self.tasks, id)?.set_due_date(due_date);
        self.persist(id, "task due date set")
    }

    /// Sets a task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`],
    /// [`TaskRegistryError::Validation`] when `priority` is outside `1..=5`
    /// (nothing is saved), or [`TaskRegistryError::Storage`].
    pub fn set_priority(&mut self, id: TaskId, priority: i64) -> TaskRegistryResult<()> {
        find_mut(&mut self.tasks, id)?.set_priority(priority)?;
        self.persist(id, "task priority set")
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns completed tasks in insertion order.
    #[must_use]
    pub fn list_completed(&self) -> Vec<Task> {
        self.filtered(Task::is_completed)
    }

    /// Returns pending tasks in insertion order.
    #[must_use]
    pub fn list_pending(&self) -> Vec<Task> {
        self.filtered(|task| !task.is_completed())
    }

    /// Returns overdue tasks in insertion order.
    #[must_use]
    pub fn list_overdue(&self) -> Vec<Task> {
        self.filtered(|task| task.is_overdue(&*self.clock))
    }

    /// Computes task counts from the live set.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|task| task.is_completed()).count();
        TaskStats {
            total: self.tasks.len(),
            completed,
            pending: self.tasks.len() - completed,
            overdue: self
                .tasks
                .iter()
                .filter(|task| task.is_overdue(&*self.clock))
                .count(),
        }
    }

    fn filtered(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|&task| predicate(task))
            .cloned()
            .collect()
    }

    fn persist(&self, id: TaskId, event: &'static str) -> TaskRegistryResult<()> {
        self.save()?;
        debug!(task_id = %id, "{event}");
        Ok(())
    }
}

fn find_mut(tasks: &mut [Task], id: TaskId) -> TaskRegistryResult<&mut Task> {
    tasks
        .iter_mut()
        .find(|task| task.id() == id)
        .ok_or(TaskRegistryError::NotFound(id))
}
