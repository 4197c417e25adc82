//! In-memory task storage for tests and embedders.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskStorage, TaskStorageError, TaskStorageResult},
};

/// Thread-safe in-memory task storage.
///
/// Clones share the same underlying state, so a test can keep a handle and
/// inspect what a registry persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStorage {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    save_count: usize,
}

impl InMemoryTaskStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState {
                tasks,
                save_count: 0,
            })),
        }
    }

    /// Returns a copy of the last persisted task set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Persistence`] when the lock is poisoned.
    pub fn snapshot(&self) -> TaskStorageResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskStorageError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.clone())
    }

    /// Returns how many times [`TaskStorage::save`] has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Persistence`] when the lock is poisoned.
    pub fn save_count(&self) -> TaskStorageResult<usize> {
        let state = self.state.read().map_err(|err| {
            TaskStorageError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.save_count)
    }
}

impl TaskStorage for InMemoryTaskStorage {
    fn load(&self) -> TaskStorageResult<Vec<Task>> {
        self.snapshot()
    }

    fn save(&self, tasks: &[Task]) -> TaskStorageResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStorageError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.tasks = tasks.to_vec();
        state.save_count += 1;
        Ok(())
    }
}
