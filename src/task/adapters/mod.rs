//! Adapter implementations of the task storage port.

pub mod json_file;
pub mod memory;
