//! In-memory datastore for board tests and headless use.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{NewTask, ProjectId, Task, TaskId, TaskStatus},
    ports::{TaskDatastore, TaskDatastoreError, TaskDatastoreResult},
};

/// A status write received by the in-memory datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusWrite {
    /// Task the write targeted.
    pub task_id: TaskId,
    /// Status the write carried.
    pub status: TaskStatus,
}

/// Thread-safe in-memory datastore with failure injection.
///
/// Every `update_status` call is recorded, including the ones made to fail.
pub struct InMemoryTaskDatastore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryDatastoreState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryDatastoreState {
    tasks: HashMap<TaskId, Task>,
    project_order: HashMap<ProjectId, Vec<TaskId>>,
    writes: Vec<StatusWrite>,
    fail_all: Option<String>,
    fail_tasks: HashMap<TaskId, String>,
}

impl InMemoryTaskDatastore {
    /// Creates an empty datastore using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskDatastore {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryTaskDatastore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

fn lock_error(err: impl ToString) -> TaskDatastoreError {
    TaskDatastoreError::persistence(std::io::Error::other(err.to_string()))
}

impl<C> InMemoryTaskDatastore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty datastore stamping updates with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryDatastoreState::default())),
            clock,
        }
    }

    fn read(&self) -> TaskDatastoreResult<RwLockReadGuard<'_, InMemoryDatastoreState>> {
        self.state.read().map_err(lock_error)
    }

    fn write(&self) -> TaskDatastoreResult<RwLockWriteGuard<'_, InMemoryDatastoreState>> {
        self.state.write().map_err(lock_error)
    }

    /// Stores existing tasks, appending them to their projects in order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDatastoreError::Persistence`] if the state lock is
    /// poisoned.
    pub fn seed(&self, tasks: impl IntoIterator<Item = Task>) -> TaskDatastoreResult<()> {
        let mut state = self.write()?;
        for task in tasks {
            let id = task.id();
            if state.tasks.insert(id, task.clone()).is_none() {
                state
                    .project_order
                    .entry(task.project_id())
                    .or_default()
                    .push(id);
            }
        }
        Ok(())
    }

    /// Makes every subsequent status write fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDatastoreError::Persistence`] if the state lock is
    /// poisoned.
    pub fn fail_updates_with(&self, reason: impl Into<String>) -> TaskDatastoreResult<()> {
        self.write()?.fail_all = Some(reason.into());
        Ok(())
    }

    /// Makes status writes for one task fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDatastoreError::Persistence`] if the state lock is
    /// poisoned.
    pub fn fail_task(&self, task_id: TaskId, reason: impl Into<String>) -> TaskDatastoreResult<()> {
        self.write()?.fail_tasks.insert(task_id, reason.into());
        Ok(())
    }

    /// Removes all injected failures.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDatastoreError::Persistence`] if the state lock is
    /// poisoned.
    pub fn clear_failures(&self) -> TaskDatastoreResult<()> {
        let mut state = self.write()?;
        state.fail_all = None;
        state.fail_tasks.clear();
        Ok(())
    }

    /// Returns every status write received so far, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDatastoreError::Persistence`] if the state lock is
    /// poisoned.
    pub fn status_writes(&self) -> TaskDatastoreResult<Vec<StatusWrite>> {
        Ok(self.read()?.writes.clone())
    }

    /// Returns the persisted status of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDatastoreError::Persistence`] if the state lock is
    /// poisoned.
    pub fn stored_status(&self, task_id: TaskId) -> TaskDatastoreResult<Option<TaskStatus>> {
        Ok(self.read()?.tasks.get(&task_id).map(Task::status))
    }

    /// Returns the persisted task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDatastoreError::Persistence`] if the state lock is
    /// poisoned.
    pub fn stored_task(&self, task_id: TaskId) -> TaskDatastoreResult<Option<Task>> {
        Ok(self.read()?.tasks.get(&task_id).cloned())
    }
}

#[async_trait]
impl<C> TaskDatastore for InMemoryTaskDatastore<C>
where
    C: Clock + Send + Sync,
{
    async fn update_status(
        &self,
        task_id: TaskId,
        status: TaskStatus,
    ) -> TaskDatastoreResult<()> {
        let mut state = self.write()?;
        state.writes.push(StatusWrite { task_id, status });

        let injected = state
            .fail_tasks
            .get(&task_id)
            .or(state.fail_all.as_ref())
            .cloned();
        if let Some(reason) = injected {
            return Err(TaskDatastoreError::persistence(std::io::Error::other(
                reason,
            )));
        }

        let task = state
            .tasks
            .get_mut(&task_id)
            .ok_or(TaskDatastoreError::NotFound(task_id))?;
        task.set_status(status);
        task.touch(&*self.clock);
        Ok(())
    }

    async fn fetch_tasks(&self, project_id: ProjectId) -> TaskDatastoreResult<Vec<Task>> {
        let state = self.read()?;
        let tasks = state
            .project_order
            .get(&project_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn create_task(&self, draft: NewTask) -> TaskDatastoreResult<Task> {
        let task = Task::from_new(draft, &*self.clock);
        let mut state = self.write()?;
        state
            .project_order
            .entry(task.project_id())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }
}
