//! Drag gesture state machine.
//!
//! A gesture starts on a task, follows the pointer over drop targets and
//! ends with a drop or a cancel. Nothing is mutated while hovering; the
//! controller only resolves the final drop into a [`StatusChangeRequest`].

use super::{DragError, TaskId, TaskStatus, TaskStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Something a dragged task can be dropped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DropTarget {
    /// The body of a board column.
    Column(TaskStatus),
    /// Another task card.
    Task(TaskId),
}

impl DropTarget {
    /// Task cards sit inside columns, so they are the more specific target.
    const fn specificity(self) -> u8 {
        match self {
            Self::Column(_) => 0,
            Self::Task(_) => 1,
        }
    }
}

/// Picks the target a drop should resolve against when the pointer is over
/// several at once. Task cards win over columns; among equals the first one
/// reported wins.
pub fn most_specific(targets: impl IntoIterator<Item = DropTarget>) -> Option<DropTarget> {
    targets.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.specificity() >= candidate.specificity() => Some(current),
        _ => Some(candidate),
    })
}

/// Request to move a task from one status to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    /// Task being moved.
    pub task_id: TaskId,
    /// Status the task held when the drop resolved.
    pub from: TaskStatus,
    /// Status the task should move to.
    pub to: TaskStatus,
}

/// Context of one in-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    active: TaskId,
    start_status: TaskStatus,
    hover: Option<DropTarget>,
}

impl DragSession {
    /// Returns the task being dragged.
    #[must_use]
    pub const fn active(&self) -> TaskId {
        self.active
    }

    /// Returns the status the task had when the gesture started.
    #[must_use]
    pub const fn start_status(&self) -> TaskStatus {
        self.start_status
    }

    /// Returns the current hover target.
    #[must_use]
    pub const fn hover(&self) -> Option<DropTarget> {
        self.hover
    }
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging(DragSession),
}

/// Why a gesture ended without a status change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// `end_drag` or `cancel_drag` was called with no gesture in progress.
    NotDragging,
    /// The task was dropped outside any target, or the gesture was
    /// cancelled.
    NoTarget,
    /// The dragged task left the board during the gesture.
    UnknownTask(TaskId),
    /// The hovered task left the board during the gesture.
    UnknownTarget(TaskId),
}

/// Result of ending a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The drop resolves to a different status.
    Requested(StatusChangeRequest),
    /// The drop resolves to the status the task already has.
    Unchanged {
        /// Task that was dropped.
        task_id: TaskId,
        /// Its unchanged status.
        status: TaskStatus,
    },
    /// The gesture produced nothing.
    Aborted(AbortReason),
}

impl DragOutcome {
    /// Returns the status change request, if the drop produced one.
    #[must_use]
    pub const fn request(&self) -> Option<StatusChangeRequest> {
        match self {
            Self::Requested(request) => Some(*request),
            Self::Unchanged { .. } | Self::Aborted(_) => None,
        }
    }
}

/// Tracks one drag gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Returns the active session, if dragging.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Starts dragging `task_id`.
    ///
    /// A gesture already in progress is discarded as if cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::UnknownTask`] when the task is not in the store;
    /// the controller is left idle.
    pub fn start_drag(&mut self, task_id: TaskId, store: &TaskStore) -> Result<(), DragError> {
        if let DragState::Dragging(previous) = self.state {
            debug!(task_id = %previous.active, "drag replaced by a new gesture");
        }
        let Some(start_status) = store.status_of(task_id) else {
            self.state = DragState::Idle;
            return Err(DragError::UnknownTask(task_id));
        };
        self.state = DragState::Dragging(DragSession {
            active: task_id,
            start_status,
            hover: None,
        });
        Ok(())
    }

    /// Records the target currently under the pointer.
    pub fn update_hover_target(&mut self, target: Option<DropTarget>) {
        match &mut self.state {
            DragState::Dragging(session) => session.hover = target,
            DragState::Idle => debug!(?target, "hover update without a drag ignored"),
        }
    }

    /// Records the most specific of several targets under the pointer.
    pub fn update_hover_targets(&mut self, targets: impl IntoIterator<Item = DropTarget>) {
        self.update_hover_target(most_specific(targets));
    }

    /// Abandons the gesture without any status change.
    pub fn cancel_drag(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(_) => DragOutcome::Aborted(AbortReason::NoTarget),
            DragState::Idle => DragOutcome::Aborted(AbortReason::NotDragging),
        }
    }

    /// Ends the gesture and resolves the drop against the current store.
    pub fn end_drag(&mut self, store: &TaskStore) -> DragOutcome {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return DragOutcome::Aborted(AbortReason::NotDragging);
        };
        let Some(target) = session.hover else {
            return DragOutcome::Aborted(AbortReason::NoTarget);
        };
        let to = match target {
            DropTarget::Column(status) => status,
            DropTarget::Task(task_id) => match store.status_of(task_id) {
                Some(status) => status,
                None => return DragOutcome::Aborted(AbortReason::UnknownTarget(task_id)),
            },
        };
        let Some(from) = store.status_of(session.active) else {
            return DragOutcome::Aborted(AbortReason::UnknownTask(session.active));
        };
        if from == to {
            return DragOutcome::Unchanged {
                task_id: session.active,
                status: from,
            };
        }
        DragOutcome::Requested(StatusChangeRequest {
            task_id: session.active,
            from,
            to,
        })
    }
}

/// Minimum pointer travel before a press on a card becomes a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationConstraint {
    distance: u32,
}

impl ActivationConstraint {
    /// Creates a constraint requiring `distance` pixels of travel.
    #[must_use]
    pub const fn new(distance: u32) -> Self {
        Self { distance }
    }

    /// Returns the required travel in pixels.
    #[must_use]
    pub const fn distance(self) -> u32 {
        self.distance
    }

    /// Returns `true` once the pointer moved at least the required distance
    /// from where it was pressed.
    #[must_use]
    pub fn is_satisfied(self, dx: i32, dy: i32) -> bool {
        let horizontal = u64::from(dx.unsigned_abs());
        let vertical = u64::from(dy.unsigned_abs());
        let required = u64::from(self.distance);
        horizontal * horizontal + vertical * vertical >= required * required
    }
}

impl Default for ActivationConstraint {
    fn default() -> Self {
        Self::new(8)
    }
}
