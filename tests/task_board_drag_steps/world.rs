//! Shared world state for board drag BDD scenarios.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::{InMemoryTaskDatastore, RecordingNotifier},
    domain::{NewTask, ProjectId, Task, TaskId, TaskStatus},
    services::{BoardConfig, Reconciliation, TaskBoard},
};

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<InMemoryTaskDatastore, RecordingNotifier>;

/// Scenario world for board drag behaviour tests.
pub struct DragWorld {
    pub project_id: ProjectId,
    pub datastore: Arc<InMemoryTaskDatastore>,
    pub notifier: Arc<RecordingNotifier>,
    pub dragged: Option<TaskId>,
    pub other: Option<TaskId>,
    pub last_reconciliation: Option<Reconciliation>,
    pub board: Option<TestBoard>,
}

impl DragWorld {
    /// Creates a world with an empty datastore.
    #[must_use]
    pub fn new() -> Self {
        Self {
            project_id: ProjectId::new(),
            datastore: Arc::new(InMemoryTaskDatastore::new()),
            notifier: Arc::new(RecordingNotifier::new()),
            dragged: None,
            other: None,
            last_reconciliation: None,
            board: None,
        }
    }

    /// Stores a new task for the scenario project and returns its identifier.
    pub fn seed_task(&self, status: &str, title: String) -> Result<TaskId, eyre::Report> {
        let column = parse_status(status)?;
        let draft = NewTask::new(self.project_id, title)
            .map_err(|err| eyre::eyre!("invalid task draft: {err}"))?
            .with_status(column);
        let task = Task::from_new(draft, &DefaultClock);
        let task_id = task.id();
        self.datastore
            .seed([task])
            .wrap_err("seed scenario datastore")?;
        Ok(task_id)
    }

    /// Loads the board from the datastore on first use.
    pub fn board_mut(&mut self) -> Result<&mut TestBoard, eyre::Report> {
        if self.board.is_none() {
            let loaded = run_async(TaskBoard::load(
                self.project_id,
                Arc::clone(&self.datastore),
                Arc::clone(&self.notifier),
                BoardConfig::default(),
            ))
            .wrap_err("load scenario board")?;
            self.board = Some(loaded);
        }
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board missing after load"))
    }

    /// Returns the task being dragged in this scenario.
    pub fn dragged(&self) -> Result<TaskId, eyre::Report> {
        self.dragged
            .ok_or_else(|| eyre::eyre!("missing dragged task in scenario world"))
    }
}

impl Default for DragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}

/// Parses a status written in storage form.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
