//! Datastore port for loading tasks and persisting status changes.

use crate::board::domain::{NewTask, ProjectId, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for datastore operations.
pub type TaskDatastoreResult<T> = Result<T, TaskDatastoreError>;

/// Remote source of truth for tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskDatastore: Send + Sync {
    /// Persists a new status for a task.
    ///
    /// Writing the same `(task_id, status)` pair twice must be harmless.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDatastoreError::NotFound`] when the task does not exist,
    /// or another variant when the write is rejected.
    async fn update_status(&self, task_id: TaskId, status: TaskStatus)
    -> TaskDatastoreResult<()>;

    /// Fetches the tasks of a project in display order.
    ///
    /// # Errors
    ///
    /// Returns an error when the datastore cannot be read.
    async fn fetch_tasks(&self, project_id: ProjectId) -> TaskDatastoreResult<Vec<Task>>;

    /// Creates a task from a validated draft and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error when the datastore rejects the insert.
    async fn create_task(&self, draft: NewTask) -> TaskDatastoreResult<Task>;
}

/// Errors returned by datastore implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskDatastoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The caller has no valid session.
    #[error("unauthorized")]
    Unauthorized,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskDatastoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
