//! In-memory task collection backing one board.

use super::{Column, Task, TaskId, TaskStatus, partition};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone)]
struct StoredTask {
    task: Task,
    revision: u64,
}

/// Authoritative local copy of the tasks of one project.
///
/// Tasks keep the order in which they were installed. Every effective status
/// change stamps the task with a fresh revision drawn from a store-wide
/// counter, which lets callers detect that a task moved again after they
/// last touched it. The counter survives snapshots, so a revision number is
/// never handed out twice.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    entries: Vec<StoredTask>,
    index: HashMap<TaskId, usize>,
    last_revision: u64,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given snapshot.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut store = Self::new();
        store.replace_all(tasks);
        store
    }

    /// Installs a fresh snapshot, discarding local state.
    ///
    /// A repeated identifier keeps its first position and takes the data of
    /// its last occurrence. Installed tasks carry the latest revision issued
    /// so far.
    pub fn replace_all(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.entries.clear();
        self.index.clear();
        for task in tasks {
            if let Some(&position) = self.index.get(&task.id()) {
                debug!(task_id = %task.id(), "duplicate task in snapshot, keeping latest data");
                if let Some(entry) = self.entries.get_mut(position) {
                    entry.task = task;
                }
                continue;
            }
            self.index.insert(task.id(), self.entries.len());
            self.entries.push(StoredTask {
                task,
                revision: self.last_revision,
            });
        }
    }

    /// Adds a task at the end of the store, or replaces it in place when the
    /// identifier is already present.
    pub fn insert(&mut self, task: Task) {
        let next = self.last_revision + 1;
        if let Some(&position) = self.index.get(&task.id()) {
            if let Some(entry) = self.entries.get_mut(position) {
                if entry.task.status() != task.status() {
                    entry.revision = next;
                    self.last_revision = next;
                }
                entry.task = task;
            }
            return;
        }
        self.index.insert(task.id(), self.entries.len());
        self.entries.push(StoredTask {
            task,
            revision: self.last_revision,
        });
    }

    /// Sets the status of a task and returns the status it had before.
    ///
    /// Unknown identifiers and unchanged statuses are no-ops that return
    /// `status` itself, so a caller can compare the result with its request
    /// to learn whether anything moved.
    pub fn apply_status(&mut self, task_id: TaskId, status: TaskStatus) -> TaskStatus {
        let next = self.last_revision + 1;
        let Some(entry) = self
            .index
            .get(&task_id)
            .and_then(|&position| self.entries.get_mut(position))
        else {
            debug!(%task_id, %status, "status change for unknown task ignored");
            return status;
        };
        let previous = entry.task.status();
        if previous != status {
            entry.task.set_status(status);
            entry.revision = next;
            self.last_revision = next;
        }
        previous
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn get(&self, task_id: TaskId) -> Option<&Task> {
        self.index
            .get(&task_id)
            .and_then(|&position| self.entries.get(position))
            .map(|entry| &entry.task)
    }

    /// Returns the current status of a task.
    #[must_use]
    pub fn status_of(&self, task_id: TaskId) -> Option<TaskStatus> {
        self.get(task_id).map(Task::status)
    }

    /// Returns the revision stamped on the task by its latest effective
    /// status change.
    #[must_use]
    pub fn revision_of(&self, task_id: TaskId) -> Option<u64> {
        self.index
            .get(&task_id)
            .and_then(|&position| self.entries.get(position))
            .map(|entry| entry.revision)
    }

    /// Returns `true` if the task is on the board.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.index.contains_key(&task_id)
    }

    /// Iterates over all tasks in store order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.entries.iter().map(|entry| &entry.task)
    }

    /// Returns the tasks with the given status in store order.
    #[must_use]
    pub fn by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks().filter(|task| task.status() == status).collect()
    }

    /// Projects the store into the four board columns.
    #[must_use]
    pub fn columns(&self) -> [Column<'_>; 4] {
        partition(self.tasks())
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
