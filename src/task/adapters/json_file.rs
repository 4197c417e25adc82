//! Flat JSON file backend for the task storage port.
//!
//! The whole task set lives in one pretty-printed JSON array. Saves write a
//! sibling temporary file and rename it over the target so readers never
//! observe a partially written file.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{self, ErrorKind};
use tracing::debug;

use crate::task::{
    domain::Task,
    ports::{TaskStorage, TaskStorageError, TaskStorageResult},
};

/// Task storage backed by a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStorage {
    path: Utf8PathBuf,
}

impl JsonFileStorage {
    /// Creates storage for the file at `path`. Nothing is touched until the
    /// first load or save.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn io_error(&self, err: io::Error) -> TaskStorageError {
        TaskStorageError::io(self.path.clone(), err)
    }

    fn split_path(&self) -> TaskStorageResult<(&Utf8Path, &str)> {
        let file_name = self.path.file_name().ok_or_else(|| {
            self.io_error(io::Error::new(
                ErrorKind::InvalidInput,
                "storage path must include a file name",
            ))
        })?;
        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        Ok((parent, file_name))
    }
}

fn temp_file_name(file_name: &str) -> String {
    format!(".{file_name}.tmp")
}

impl TaskStorage for JsonFileStorage {
    fn load(&self) -> TaskStorageResult<Vec<Task>> {
        let (parent, file_name) = self.split_path()?;
        let dir = match Dir::open_ambient_dir(parent, ambient_authority()) {
            Ok(dir) => dir,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(self.io_error(err)),
        };
        let contents = match dir.read_to_string(file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path, "task file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&contents)
            .map_err(|err| TaskStorageError::decode(self.path.clone(), err))?;
        debug!(path = %self.path, count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> TaskStorageResult<()> {
        let (parent, file_name) = self.split_path()?;
        Dir::create_ambient_dir_all(parent, ambient_authority())
            .map_err(|err| self.io_error(err))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| self.io_error(err))?;

        let mut encoded =
            serde_json::to_vec_pretty(tasks).map_err(|err| self.io_error(io::Error::from(err)))?;
        encoded.push(b'\n');

        let staging = temp_file_name(file_name);
        dir.write(&staging, &encoded)
            .map_err(|err| self.io_error(err))?;
        if let Err(err) = dir.rename(&staging, &dir, file_name) {
            let _cleanup = dir.remove_file(&staging);
            return Err(self.io_error(err));
        }

        debug!(path = %self.path, count = tasks.len(), "saved tasks");
        Ok(())
    }
}
