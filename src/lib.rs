//! Taskman: a personal task tracker.
//!
//! Tasks live in an in-memory registry that assigns identifiers, applies
//! lifecycle mutations and persists the whole set after every change. The
//! same registry backs a command-line interface and a REST API.
//!
//! # Architecture
//!
//! Taskman follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports and presentation
//!   surfaces (JSON file storage, CLI, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task entity, storage port and lifecycle registry
//! - [`config`]: Runtime configuration and storage path resolution
//! - [`telemetry`]: Structured logging setup
//! - [`cli`]: Command-line adapter
//! - [`api`]: REST adapter

pub mod api;
pub mod cli;
pub mod config;
pub mod task;
pub mod telemetry;
