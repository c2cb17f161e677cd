//! Notification port for failed status changes.

use crate::board::domain::{TaskId, TaskStatus};

/// A status change that could not be persisted and was rolled back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChangeFailure {
    /// Task whose move failed.
    pub task_id: TaskId,
    /// Status the user tried to move the task to.
    pub attempted: TaskStatus,
    /// Human-readable failure reason from the datastore.
    pub reason: String,
}

/// Surfaces failed status changes to the user.
///
/// Implementations must not block; the board stays interactive while the
/// notification is shown.
pub trait StatusChangeNotifier: Send + Sync {
    /// Called once for every failed status change.
    fn status_change_failed(&self, failure: &StatusChangeFailure);
}

impl<F> StatusChangeNotifier for F
where
    F: Fn(&StatusChangeFailure) + Send + Sync,
{
    fn status_change_failed(&self, failure: &StatusChangeFailure) {
        self(failure);
    }
}
