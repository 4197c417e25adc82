//! Task lifecycle management.
//!
//! This module owns the task record, its persistence contract and the
//! registry that assigns identifiers, applies mutations and derives list
//! views and statistics. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
