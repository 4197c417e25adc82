//! Task tracker entry point.
//!
//! Runs one command against the storage file, or serves the REST API when
//! started with `--api`:
//!
//! ```text
//! taskman add "Buy milk" "2 litres"
//! taskman list --sort priority
//! taskman --api --addr 127.0.0.1:8080
//! ```

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mockable::DefaultClock;
use taskman::{
    api,
    cli::{self, Cli, CliError},
    config::ConfigError,
    task::{
        adapters::json_file::JsonFileStorage,
        services::{TaskRegistry, TaskRegistryError},
    },
    telemetry::{self, TelemetryError},
};
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::{debug, error};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] TaskRegistryError),
    #[error(transparent)]
    Command(#[from] CliError),
    #[error("API server failed: {0}")]
    Server(#[source] io::Error),
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        error!(error = %err, "taskman failed");
        let _report = writeln!(io::stderr(), "Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), AppError> {
    let args = Cli::parse();
    telemetry::init()?;
    let config = args.config.resolve()?;
    debug!(path = %config.storage_path, "using task storage file");

    let storage = JsonFileStorage::new(config.storage_path);
    let mut registry = TaskRegistry::new(storage, Arc::new(DefaultClock))?;

    if config.api_mode {
        let runtime = Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(AppError::Server)?;
        return runtime
            .block_on(api::serve(registry, config.listen_addr))
            .map_err(AppError::Server);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::execute(args.command, &mut registry, &mut out)?;
    Ok(())
}
