//! When steps for task registry BDD scenarios.

use super::world::TaskRegistryWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskman::task::domain::TaskId;

#[when(r#"a task titled "{title}" is added"#)]
fn add_task(world: &mut TaskRegistryWorld, title: String) -> Result<(), eyre::Report> {
    let task = world
        .registry_mut()?
        .add(&title, "")
        .wrap_err_with(|| format!("add task '{title}'"))?;
    world.last_added = Some(task);
    Ok(())
}

#[when("the priority of task {id:u64} is set to {priority:i64}")]
fn set_priority(
    world: &mut TaskRegistryWorld,
    id: u64,
    priority: i64,
) -> Result<(), eyre::Report> {
    let result = world.registry_mut()?.set_priority(TaskId::new(id), priority);
    world.last_result = Some(result);
    Ok(())
}

#[when("task {id:u64} is marked complete")]
fn mark_complete(world: &mut TaskRegistryWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .registry_mut()?
        .mark_complete(TaskId::new(id))
        .wrap_err_with(|| format!("complete task {id}"))
}

#[when("task {id:u64} is deleted")]
fn delete_task(world: &mut TaskRegistryWorld, id: u64) -> Result<(), eyre::Report> {
    world
        .registry_mut()?
        .delete(TaskId::new(id))
        .wrap_err_with(|| format!("delete task {id}"))
}
