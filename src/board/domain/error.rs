//! Error types for board domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// An hour estimate or log is negative or not a finite number.
    #[error("invalid hour value {0}, expected a finite non-negative number")]
    InvalidHours(f64),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Errors returned when a drag gesture cannot start.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DragError {
    /// The pressed task is not on the board.
    #[error("cannot drag task {0}: not on the board")]
    UnknownTask(TaskId),
}
