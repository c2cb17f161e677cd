//! Domain model for the kanban board.
//!
//! The board domain covers the task store, the column projection and the
//! drag gesture state machine. All of it is synchronous and free of I/O;
//! persistence lives behind the ports.

mod column;
mod drag;
mod error;
mod ids;
mod status;
mod store;
mod task;

pub use column::{Column, partition};
pub use drag::{
    AbortReason, ActivationConstraint, DragController, DragOutcome, DragSession, DragState,
    DropTarget, StatusChangeRequest, most_specific,
};
pub use error::{DragError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{ProfileId, ProjectId, TaskId};
pub use status::{TaskPriority, TaskStatus};
pub use store::TaskStore;
pub use task::{AssigneeRef, NewTask, PersistedTaskData, Task};
