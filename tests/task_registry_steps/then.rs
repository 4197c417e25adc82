//! Then steps for task registry BDD scenarios.

use super::world::TaskRegistryWorld;
use rstest_bdd_macros::then;
use taskman::task::{
    domain::{Task, TaskId},
    services::{ErrorKind, TaskStats},
};

fn added(world: &TaskRegistryWorld) -> Result<&Task, eyre::Report> {
    world
        .last_added
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no task added in scenario"))
}

#[then("the added task has id {id:u64}")]
fn added_task_has_id(world: &TaskRegistryWorld, id: u64) -> Result<(), eyre::Report> {
    let task = added(world)?;
    if task.id() != TaskId::new(id) {
        return Err(eyre::eyre!("expected id {id}, found {}", task.id()));
    }
    Ok(())
}

#[then("the added task has priority {priority:u8}")]
fn added_task_has_priority(world: &TaskRegistryWorld, priority: u8) -> Result<(), eyre::Report> {
    let task = added(world)?;
    if task.priority().value() != priority {
        return Err(eyre::eyre!(
            "expected priority {priority}, found {}",
            task.priority().value()
        ));
    }
    Ok(())
}

#[then("the added task is pending")]
fn added_task_is_pending(world: &TaskRegistryWorld) -> Result<(), eyre::Report> {
    if added(world)?.is_completed() {
        return Err(eyre::eyre!("expected a pending task"));
    }
    Ok(())
}

#[then("the last operation succeeded")]
fn last_operation_succeeded(world: &TaskRegistryWorld) -> Result<(), eyre::Report> {
    match &world.last_result {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected success, got: {err}")),
        None => Err(eyre::eyre!("no operation recorded")),
    }
}

#[then("the last operation failed with a validation error")]
fn last_operation_failed_validation(world: &TaskRegistryWorld) -> Result<(), eyre::Report> {
    match &world.last_result {
        Some(Err(err)) if err.kind() == ErrorKind::Validation => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected a validation error, got: {err}")),
        Some(Ok(())) => Err(eyre::eyre!("expected the operation to fail")),
        None => Err(eyre::eyre!("no operation recorded")),
    }
}

#[then("task {id:u64} has priority {priority:u8}")]
fn task_has_priority(
    world: &TaskRegistryWorld,
    id: u64,
    priority: u8,
) -> Result<(), eyre::Report> {
    let task = world.registry()?.get(TaskId::new(id))?;
    if task.priority().value() != priority {
        return Err(eyre::eyre!(
            "expected priority {priority}, found {}",
            task.priority().value()
        ));
    }
    Ok(())
}

#[then(
    "the stats report {total:usize} total, {completed:usize} completed, {pending:usize} pending and {overdue:usize} overdue"
)]
fn stats_report(
    world: &TaskRegistryWorld,
    total: usize,
    completed: usize,
    pending: usize,
    overdue: usize,
) -> Result<(), eyre::Report> {
    let expected = TaskStats {
        total,
        completed,
        pending,
        overdue,
    };
    let actual = world.registry()?.stats();
    if actual != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {actual:?}"));
    }
    Ok(())
}
