//! Shared world state for task registry BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskman::task::{
    adapters::memory::InMemoryTaskStorage,
    domain::Task,
    services::{TaskRegistry, TaskRegistryError},
};

/// Registry type used by the BDD world.
pub type TestRegistry = TaskRegistry<InMemoryTaskStorage, DefaultClock>;

/// Scenario world for registry behaviour tests.
#[derive(Default)]
pub struct TaskRegistryWorld {
    pub registry: Option<TestRegistry>,
    pub last_added: Option<Task>,
    pub last_result: Option<Result<(), TaskRegistryError>>,
}

impl TaskRegistryWorld {
    /// Returns the registry created by a given step.
    pub fn registry_mut(&mut self) -> Result<&mut TestRegistry, eyre::Report> {
        self.registry
            .as_mut()
            .ok_or_else(|| eyre::eyre!("registry not initialised in scenario world"))
    }

    /// Returns the registry created by a given step.
    pub fn registry(&self) -> Result<&TestRegistry, eyre::Report> {
        self.registry
            .as_ref()
            .ok_or_else(|| eyre::eyre!("registry not initialised in scenario world"))
    }

    /// Creates a registry over empty in-memory storage.
    pub fn start_empty(&mut self) -> Result<(), eyre::Report> {
        let registry = TaskRegistry::new(InMemoryTaskStorage::new(), Arc::new(DefaultClock))?;
        self.registry = Some(registry);
        Ok(())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskRegistryWorld {
    TaskRegistryWorld::default()
}
