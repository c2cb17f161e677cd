//! When steps for board drag BDD scenarios.

use super::world::{DragWorld, parse_status, run_async};
use rstest_bdd_macros::when;
use taskboard::board::domain::DropTarget;

fn drop_on(world: &mut DragWorld, target: Option<DropTarget>) -> Result<(), eyre::Report> {
    let dragged = world.dragged()?;
    let board = world.board_mut()?;
    board
        .start_drag(dragged)
        .map_err(|err| eyre::eyre!("start drag: {err}"))?;
    board.update_hover_target(target);
    let reconciliation = run_async(board.drop_active());
    world.last_reconciliation = reconciliation;
    Ok(())
}

#[when(r#"the task is dropped on the "{status}" column"#)]
fn dropped_on_column(world: &mut DragWorld, status: String) -> Result<(), eyre::Report> {
    let column = parse_status(&status)?;
    drop_on(world, Some(DropTarget::Column(column)))
}

#[when("the task is dropped on the other task")]
fn dropped_on_other_task(world: &mut DragWorld) -> Result<(), eyre::Report> {
    let other = world
        .other
        .ok_or_else(|| eyre::eyre!("missing second task in scenario world"))?;
    drop_on(world, Some(DropTarget::Task(other)))
}

#[when("the task is released outside every column")]
fn released_outside(world: &mut DragWorld) -> Result<(), eyre::Report> {
    drop_on(world, None)
}
