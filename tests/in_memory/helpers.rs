//! Shared test helpers for in-memory datastore integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryTaskDatastore,
    domain::{NewTask, ProjectId, Task, TaskStatus},
};

/// Provides a fresh in-memory datastore for each test.
#[fixture]
pub fn datastore() -> InMemoryTaskDatastore {
    InMemoryTaskDatastore::new()
}

/// Builds a stored task for `project_id` in the given column.
///
/// # Errors
///
/// Returns an error if the title is blank.
pub fn task_in(
    project_id: ProjectId,
    title: &str,
    status: TaskStatus,
) -> Result<Task, eyre::Report> {
    let draft = NewTask::new(project_id, title)
        .map_err(|err| eyre::eyre!("invalid draft: {err}"))?
        .with_status(status);
    Ok(Task::from_new(draft, &DefaultClock))
}
