//! Task board facade consumed by the view layer.

use crate::board::{
    domain::{
        ActivationConstraint, Column, DragController, DragError, DragOutcome, DragState,
        DropTarget, NewTask, ProjectId, Task, TaskId, TaskStore,
    },
    ports::{StatusChangeNotifier, TaskDatastore, TaskDatastoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use super::{
    BoardConfig, PendingStatusChange, Reconciliation, SettledStatusChange,
    StatusMutationCoordinator,
};

/// Errors returned by board operations that talk to the datastore directly.
#[derive(Debug, Clone, Error)]
pub enum TaskBoardError {
    /// A draft for another project was submitted to this board.
    #[error("task draft belongs to project {found}, board shows project {expected}")]
    ForeignProject {
        /// Project the board displays.
        expected: ProjectId,
        /// Project the draft names.
        found: ProjectId,
    },

    /// Datastore operation failed.
    #[error(transparent)]
    Datastore(#[from] TaskDatastoreError),
}

/// Result type for task board operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Kanban board for one project.
///
/// The board owns its task store; nothing else mutates it. Gestures are fed
/// in through [`TaskBoard::start_drag`], [`TaskBoard::update_hover_target`]
/// and [`TaskBoard::end_drag`]. A drop that resolves to a new status changes
/// the store immediately and hands back a [`PendingStatusChange`] whose
/// write the caller drives through [`TaskBoard::coordinator`] and then
/// hands to [`TaskBoard::settle`]. [`TaskBoard::drop_active`] does all of
/// this in one call.
pub struct TaskBoard<D, N>
where
    D: TaskDatastore,
    N: StatusChangeNotifier,
{
    project_id: ProjectId,
    config: BoardConfig,
    datastore: Arc<D>,
    store: TaskStore,
    drag: DragController,
    coordinator: StatusMutationCoordinator<D, N>,
}

impl<D, N> TaskBoard<D, N>
where
    D: TaskDatastore,
    N: StatusChangeNotifier,
{
    /// Creates an empty board; call [`TaskBoard::refresh`] to fill it.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        datastore: Arc<D>,
        notifier: Arc<N>,
        config: BoardConfig,
    ) -> Self {
        let coordinator =
            StatusMutationCoordinator::new(Arc::clone(&datastore), notifier, config.rollback_policy);
        Self {
            project_id,
            config,
            datastore,
            store: TaskStore::new(),
            drag: DragController::new(),
            coordinator,
        }
    }

    /// Creates a board and loads the project's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Datastore`] when the tasks cannot be
    /// fetched.
    pub async fn load(
        project_id: ProjectId,
        datastore: Arc<D>,
        notifier: Arc<N>,
        config: BoardConfig,
    ) -> TaskBoardResult<Self> {
        let mut board = Self::new(project_id, datastore, notifier, config);
        board.refresh().await?;
        Ok(board)
    }

    /// Replaces the local tasks with a fresh snapshot from the datastore.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Datastore`] when the tasks cannot be
    /// fetched; the local tasks are left unchanged.
    pub async fn refresh(&mut self) -> TaskBoardResult<()> {
        let tasks = self.datastore.fetch_tasks(self.project_id).await?;
        info!(project_id = %self.project_id, count = tasks.len(), "board loaded");
        self.store.replace_all(tasks);
        Ok(())
    }

    /// Returns the project this board displays.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the drag activation constraint for pointer handlers.
    #[must_use]
    pub const fn activation(&self) -> ActivationConstraint {
        self.config.activation
    }

    /// Returns the local task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.store.get(task_id)
    }

    /// Projects the tasks into the four board columns.
    #[must_use]
    pub fn columns(&self) -> [Column<'_>; 4] {
        self.store.columns()
    }

    /// Returns the coordinator used to persist pending changes.
    ///
    /// Clone it to drive writes while the board stays available for further
    /// gestures.
    #[must_use]
    pub const fn coordinator(&self) -> &StatusMutationCoordinator<D, N> {
        &self.coordinator
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Starts dragging a task.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::UnknownTask`] when the task is not on the board.
    pub fn start_drag(&mut self, task_id: TaskId) -> Result<(), DragError> {
        self.drag.start_drag(task_id, &self.store)
    }

    /// Records the target under the pointer, or `None` outside any target.
    pub fn update_hover_target(&mut self, target: Option<DropTarget>) {
        self.drag.update_hover_target(target);
    }

    /// Records the most specific of several targets under the pointer.
    pub fn update_hover_targets(&mut self, targets: impl IntoIterator<Item = DropTarget>) {
        self.drag.update_hover_targets(targets);
    }

    /// Abandons the current gesture without any status change.
    pub fn cancel_drag(&mut self) -> DragOutcome {
        self.drag.cancel_drag()
    }

    /// Ends the current gesture.
    ///
    /// When the drop resolves to a new status the store is updated at once
    /// and the returned change must be persisted and settled.
    pub fn end_drag(&mut self) -> Option<PendingStatusChange> {
        match self.drag.end_drag(&self.store) {
            DragOutcome::Requested(request) => self.coordinator.begin(&mut self.store, request),
            outcome => {
                debug!(?outcome, "drop produced no status change");
                None
            }
        }
    }

    /// Reconciles the store with a settled write.
    pub fn settle(&mut self, settled: SettledStatusChange) -> Reconciliation {
        self.coordinator.settle(&mut self.store, settled)
    }

    /// Ends the current gesture and, if it moved a task, persists and
    /// settles the change before returning.
    pub async fn drop_active(&mut self) -> Option<Reconciliation> {
        let pending = self.end_drag()?;
        let settled = self.coordinator.persist(pending).await;
        Some(self.settle(settled))
    }

    /// Creates a task through the datastore and adds it to the board.
    ///
    /// Creation is not optimistic: the task appears once the datastore has
    /// accepted it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::ForeignProject`] for a draft of another
    /// project, or [`TaskBoardError::Datastore`] when the insert fails.
    pub async fn create_task(&mut self, draft: NewTask) -> TaskBoardResult<TaskId> {
        if draft.project_id() != self.project_id {
            return Err(TaskBoardError::ForeignProject {
                expected: self.project_id,
                found: draft.project_id(),
            });
        }
        let task = self.datastore.create_task(draft).await?;
        let task_id = task.id();
        info!(%task_id, status = %task.status(), "task created");
        self.store.insert(task);
        Ok(task_id)
    }
}
