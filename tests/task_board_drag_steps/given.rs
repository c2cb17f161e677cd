//! Given steps for board drag BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::given;

#[given(r#"a board with a "{status}" task titled "{title}""#)]
fn board_with_task(world: &mut DragWorld, status: String, title: String) -> Result<(), eyre::Report> {
    world.dragged = Some(world.seed_task(&status, title)?);
    Ok(())
}

#[given(r#"another "{status}" task titled "{title}""#)]
fn another_task(world: &mut DragWorld, status: String, title: String) -> Result<(), eyre::Report> {
    world.other = Some(world.seed_task(&status, title)?);
    Ok(())
}

#[given(r#"the datastore rejects status updates with "{reason}""#)]
fn datastore_rejects_updates(world: &mut DragWorld, reason: String) -> Result<(), eyre::Report> {
    world
        .datastore
        .fail_updates_with(reason)
        .map_err(|err| eyre::eyre!("inject datastore failure: {err}"))
}
