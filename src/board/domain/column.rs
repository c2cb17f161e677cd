//! Column projection of the task store.

use super::{Task, TaskId, TaskStatus};

/// One board lane: a status and the tasks currently holding it.
///
/// Columns borrow from the store they were projected from and are never a
/// source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    status: TaskStatus,
    tasks: Vec<&'a Task>,
}

impl<'a> Column<'a> {
    const fn empty(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }

    /// Returns the status this column represents.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column tasks in store order.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Returns the identifiers of the column tasks in store order.
    #[must_use]
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id()).collect()
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Splits tasks into the four workflow columns.
///
/// Columns come back in [`TaskStatus::ALL`] order and each keeps the
/// relative order of its tasks from the input. Every task lands in exactly
/// one column.
pub fn partition<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> [Column<'a>; 4] {
    let mut columns = TaskStatus::ALL.map(Column::empty);
    for task in tasks {
        if let Some(column) = columns.get_mut(task.status().column_index()) {
            column.tasks.push(task);
        }
    }
    columns
}
