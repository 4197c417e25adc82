//! Runtime configuration resolved from command-line flags and the
//! environment.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Storage file used when none is given.
pub const DEFAULT_STORAGE_FILE: &str = "tasks.json";

/// Address the REST server listens on by default.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Directory under the home directory holding relative storage files.
pub const DATA_DIR_NAME: &str = ".task_manager";

/// Errors raised while resolving configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A relative storage path was given but no home directory is known.
    #[error("cannot resolve storage file '{0}': home directory is not set")]
    MissingHome(Utf8PathBuf),

    /// The home directory path is not valid UTF-8.
    #[error("home directory is not valid UTF-8: {0}")]
    NonUtf8Home(String),
}

/// Global options shared by every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ConfigArgs {
    /// Path to the storage file; relative paths live under
    /// `~/.task_manager/`.
    #[arg(long, env = "TASKMAN_FILE", default_value = DEFAULT_STORAGE_FILE)]
    pub file: Utf8PathBuf,

    /// Run the REST API server instead of a command.
    #[arg(long)]
    pub api: bool,

    /// Address for the REST API server; `:<port>` listens on every
    /// interface.
    #[arg(
        long,
        env = "TASKMAN_ADDR",
        default_value = DEFAULT_LISTEN_ADDR,
        value_parser = parse_listen_addr
    )]
    pub addr: SocketAddr,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Absolute (or home-anchored) storage file path.
    pub storage_path: Utf8PathBuf,
    /// Whether to serve the REST API.
    pub api_mode: bool,
    /// REST API listen address.
    pub listen_addr: SocketAddr,
}

impl ConfigArgs {
    /// Resolves the options against the current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a relative storage path cannot be
    /// anchored.
    pub fn resolve(&self) -> Result<AppConfig, ConfigError> {
        let home = home_dir()?;
        self.resolve_with_home(home.as_deref())
    }

    /// Resolves the options against an explicit home directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingHome`] when the storage path is
    /// relative and `home` is `None`.
    pub fn resolve_with_home(&self, home: Option<&Utf8Path>) -> Result<AppConfig, ConfigError> {
        Ok(AppConfig {
            storage_path: resolve_storage_path(&self.file, home)?,
            api_mode: self.api,
            listen_addr: self.addr,
        })
    }
}

/// Parses a listen address, expanding a bare `:<port>` to all interfaces.
///
/// # Errors
///
/// Returns [`AddrParseError`] when `value` is not a socket address.
pub fn parse_listen_addr(value: &str) -> Result<SocketAddr, AddrParseError> {
    value.strip_prefix(':').map_or_else(
        || value.parse(),
        |port| format!("0.0.0.0:{port}").parse(),
    )
}

/// Anchors a relative storage path at `<home>/.task_manager/`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingHome`] when `file` is relative and `home`
/// is `None`.
pub fn resolve_storage_path(
    file: &Utf8Path,
    home: Option<&Utf8Path>,
) -> Result<Utf8PathBuf, ConfigError> {
    if file.is_absolute() {
        return Ok(file.to_owned());
    }
    let anchor = home.ok_or_else(|| ConfigError::MissingHome(file.to_owned()))?;
    Ok(anchor.join(DATA_DIR_NAME).join(file))
}

/// Returns the current user's home directory, if one is configured.
///
/// # Errors
///
/// Returns [`ConfigError::NonUtf8Home`] when the directory is not UTF-8.
pub fn home_dir() -> Result<Option<Utf8PathBuf>, ConfigError> {
    let Some(raw) = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|value| !value.is_empty())
    else {
        return Ok(None);
    };
    Utf8PathBuf::from_path_buf(PathBuf::from(raw))
        .map(Some)
        .map_err(|path| ConfigError::NonUtf8Home(path.display().to_string()))
}
