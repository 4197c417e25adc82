//! Given steps for task registry BDD scenarios.

use super::world::TaskRegistryWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty task registry")]
fn empty_registry(world: &mut TaskRegistryWorld) -> Result<(), eyre::Report> {
    world
        .start_empty()
        .wrap_err("create registry over empty storage")
}
