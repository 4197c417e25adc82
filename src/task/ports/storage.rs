//! Storage port for whole-set task persistence.

use crate::task::domain::Task;
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task storage operations.
pub type TaskStorageResult<T> = Result<T, TaskStorageError>;

/// Task persistence contract.
///
/// Implementations always persist and return the complete task set; there
/// are no incremental writes.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStorage: Send + Sync {
    /// Loads every persisted task in stored order.
    ///
    /// Returns an empty list when no prior state exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Io`] when the backing store cannot be
    /// read and [`TaskStorageError::Decode`] when its contents are malformed.
    fn load(&self) -> TaskStorageResult<Vec<Task>>;

    /// Replaces the persisted set with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Io`] when the backing store cannot be
    /// written.
    fn save(&self, tasks: &[Task]) -> TaskStorageResult<()>;
}

/// Errors returned by task storage implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// File the operation targeted.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },

    /// The persisted contents could not be decoded.
    #[error("failed to decode tasks from {path}: {source}")]
    Decode {
        /// File that held the malformed contents.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        source: Arc<serde_json::Error>,
    },

    /// Failure in a non-file backend.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStorageError {
    /// Wraps an I/O failure for `path`.
    pub fn io(path: impl Into<Utf8PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a decode failure for `path`.
    pub fn decode(path: impl Into<Utf8PathBuf>, err: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a backend-specific failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
