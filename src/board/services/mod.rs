//! Application services for the kanban board.

mod board;
mod config;
mod coordinator;

pub use board::{TaskBoard, TaskBoardError, TaskBoardResult};
pub use config::{BoardConfig, RollbackPolicy};
pub use coordinator::{
    PendingStatusChange, Reconciliation, SettledStatusChange, StatusMutationCoordinator,
};
