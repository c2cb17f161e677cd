//! Then steps for board drag BDD scenarios.

use super::world::{DragWorld, parse_status};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &DragWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let dragged = world.dragged()?;
    let board = world
        .board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("board not loaded in scenario world"))?;
    let found = board
        .task(dragged)
        .map(|task| task.status())
        .ok_or_else(|| eyre::eyre!("dragged task missing from board"))?;

    if found != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            found.as_str()
        ));
    }
    Ok(())
}

#[then(r#"the datastore holds status "{status}""#)]
fn datastore_holds_status(world: &DragWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let stored = world
        .datastore
        .stored_status(world.dragged()?)
        .map_err(|err| eyre::eyre!("read datastore: {err}"))?;

    if stored != Some(expected) {
        return Err(eyre::eyre!("expected stored status {expected}, found {stored:?}"));
    }
    Ok(())
}

#[then("the datastore received no writes")]
fn datastore_received_no_writes(world: &DragWorld) -> Result<(), eyre::Report> {
    let writes = world
        .datastore
        .status_writes()
        .map_err(|err| eyre::eyre!("read datastore: {err}"))?;

    if !writes.is_empty() {
        return Err(eyre::eyre!("expected no writes, found {writes:?}"));
    }
    if let Some(reconciliation) = world.last_reconciliation {
        return Err(eyre::eyre!(
            "expected no reconciliation, found {reconciliation:?}"
        ));
    }
    Ok(())
}

#[then("no failure is reported")]
fn no_failure_reported(world: &DragWorld) -> Result<(), eyre::Report> {
    if !world.notifier.is_empty() {
        return Err(eyre::eyre!(
            "expected no failures, found {:?}",
            world.notifier.failures()
        ));
    }
    Ok(())
}

#[then(r#"one failure is reported for status "{status}""#)]
fn one_failure_reported(world: &DragWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let failures = world.notifier.failures();
    let attempted: Vec<_> = failures.iter().map(|failure| failure.attempted).collect();

    if attempted != vec![expected] {
        return Err(eyre::eyre!("expected one failure for {expected}, found {failures:?}"));
    }
    Ok(())
}
