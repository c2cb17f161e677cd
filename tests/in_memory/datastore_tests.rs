//! In-memory integration tests for the task datastore contract.

use super::helpers::{datastore, task_in};
use rstest::rstest;
use taskboard::board::{
    adapters::memory::{InMemoryTaskDatastore, StatusWrite},
    domain::{NewTask, ProjectId, Task, TaskId, TaskStatus},
    ports::{TaskDatastore, TaskDatastoreError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_returns_project_tasks_in_seed_order(
    datastore: InMemoryTaskDatastore,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new();
    let first = task_in(project_id, "Outline", TaskStatus::Todo)?;
    let foreign = task_in(ProjectId::new(), "Elsewhere", TaskStatus::Todo)?;
    let second = task_in(project_id, "Illustrate", TaskStatus::Done)?;
    let expected = vec![first.id(), second.id()];
    datastore.seed([first, foreign, second])?;

    let fetched = datastore.fetch_tasks(project_id).await?;

    let ids: Vec<TaskId> = fetched.iter().map(Task::id).collect();
    eyre::ensure!(ids == expected, "unexpected fetch order: {ids:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_of_unknown_project_is_empty(
    datastore: InMemoryTaskDatastore,
) -> Result<(), eyre::Report> {
    let fetched = datastore.fetch_tasks(ProjectId::new()).await?;
    eyre::ensure!(fetched.is_empty(), "expected no tasks");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_status_persists_and_records_write(
    datastore: InMemoryTaskDatastore,
) -> Result<(), eyre::Report> {
    let task = task_in(ProjectId::new(), "Print proofs", TaskStatus::Todo)?;
    let task_id = task.id();
    let created_at = task.created_at();
    datastore.seed([task])?;

    datastore.update_status(task_id, TaskStatus::InReview).await?;
    datastore.update_status(task_id, TaskStatus::InReview).await?;

    let stored = datastore
        .stored_task(task_id)?
        .ok_or_else(|| eyre::eyre!("task missing after update"))?;
    eyre::ensure!(stored.status() == TaskStatus::InReview, "status not persisted");
    eyre::ensure!(stored.updated_at() >= created_at, "update time moved backwards");
    let writes = datastore.status_writes()?;
    eyre::ensure!(
        writes
            == vec![
                StatusWrite {
                    task_id,
                    status: TaskStatus::InReview,
                };
                2
            ],
        "unexpected writes: {writes:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_status_of_unknown_task_is_not_found(datastore: InMemoryTaskDatastore) {
    let missing = TaskId::new();

    let result = datastore.update_status(missing, TaskStatus::Done).await;

    assert!(matches!(result, Err(TaskDatastoreError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn injected_failures_reject_writes_until_cleared(
    datastore: InMemoryTaskDatastore,
) -> Result<(), eyre::Report> {
    let task = task_in(ProjectId::new(), "Pack samples", TaskStatus::InProgress)?;
    let task_id = task.id();
    datastore.seed([task])?;
    datastore.fail_updates_with("service unavailable")?;

    let rejected = datastore.update_status(task_id, TaskStatus::Done).await;

    eyre::ensure!(
        matches!(&rejected, Err(err) if err.to_string().contains("service unavailable")),
        "expected injected failure, got {rejected:?}"
    );
    eyre::ensure!(
        datastore.stored_status(task_id)? == Some(TaskStatus::InProgress),
        "rejected write changed the stored status"
    );

    datastore.clear_failures()?;
    datastore.update_status(task_id, TaskStatus::Done).await?;
    eyre::ensure!(
        datastore.stored_status(task_id)? == Some(TaskStatus::Done),
        "write after clearing failures was not persisted"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn per_task_failure_leaves_other_tasks_writable(
    datastore: InMemoryTaskDatastore,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new();
    let locked = task_in(project_id, "Locked", TaskStatus::Todo)?;
    let free = task_in(project_id, "Free", TaskStatus::Todo)?;
    let (locked_id, free_id) = (locked.id(), free.id());
    datastore.seed([locked, free])?;
    datastore.fail_task(locked_id, "row locked")?;

    let locked_result = datastore.update_status(locked_id, TaskStatus::Done).await;
    datastore.update_status(free_id, TaskStatus::Done).await?;

    eyre::ensure!(locked_result.is_err(), "locked task accepted a write");
    eyre::ensure!(
        datastore.stored_status(free_id)? == Some(TaskStatus::Done),
        "free task was not updated"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_appends_to_project(
    datastore: InMemoryTaskDatastore,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new();
    let existing = task_in(project_id, "Existing", TaskStatus::Todo)?;
    datastore.seed([existing])?;
    let draft = NewTask::new(project_id, "Created")
        .map_err(|err| eyre::eyre!("invalid draft: {err}"))?;

    let created = datastore.create_task(draft).await?;

    eyre::ensure!(created.status() == TaskStatus::Todo, "draft status not defaulted");
    let fetched = datastore.fetch_tasks(project_id).await?;
    eyre::ensure!(
        fetched.last().map(Task::id) == Some(created.id()),
        "created task not appended"
    );
    Ok(())
}
