//! Task record and the draft used to create new tasks.

use super::{ProfileId, ProjectId, TaskDomainError, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Denormalized assignee shown on a task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeRef {
    /// Profile identifier of the assignee.
    pub id: ProfileId,
    /// Display name of the assignee.
    pub full_name: String,
    /// Avatar image location, if the profile has one.
    pub avatar_url: Option<String>,
}

impl AssigneeRef {
    /// Creates an assignee reference without an avatar.
    #[must_use]
    pub fn new(id: ProfileId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            avatar_url: None,
        }
    }

    /// Returns up to two upper-case initials of the full name, or `?`.
    #[must_use]
    pub fn initials(&self) -> String {
        let initials: String = self
            .full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_owned()
        } else {
            initials
        }
    }
}

/// A task on the board.
///
/// The board engine only ever changes [`Task::status`]; every other field is
/// carried along for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    assignee: Option<AssigneeRef>,
    priority: TaskPriority,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    estimated_hours: f64,
    logged_hours: f64,
    created_by: Option<ProfileId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Task title.
    pub title: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Assigned team member, if any.
    pub assignee: Option<AssigneeRef>,
    /// Task priority.
    pub priority: TaskPriority,
    /// Workflow status.
    pub status: TaskStatus,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Hours logged so far.
    pub logged_hours: f64,
    /// Creator profile, if known.
    pub created_by: Option<ProfileId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materializes a validated draft into a task record with a fresh id.
    #[must_use]
    pub fn from_new(draft: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            project_id: draft.project_id,
            title: draft.title,
            description: draft.description,
            assignee: draft.assignee,
            priority: draft.priority,
            status: draft.status,
            due_date: draft.due_date,
            estimated_hours: draft.estimated_hours,
            logged_hours: 0.0,
            created_by: draft.created_by,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            priority: data.priority,
            status: data.status,
            due_date: data.due_date,
            estimated_hours: data.estimated_hours,
            logged_hours: data.logged_hours,
            created_by: data.created_by,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&AssigneeRef> {
        self.assignee.as_ref()
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the estimated effort in hours.
    #[must_use]
    pub const fn estimated_hours(&self) -> f64 {
        self.estimated_hours
    }

    /// Returns the hours logged so far.
    #[must_use]
    pub const fn logged_hours(&self) -> f64 {
        self.logged_hours
    }

    /// Returns the creator profile, if known.
    #[must_use]
    pub const fn created_by(&self) -> Option<ProfileId> {
        self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the due date has passed and the task is not done.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != TaskStatus::Done && self.due_date.is_some_and(|due| due < today)
    }

    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    pub(crate) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Validated draft for a task about to be created.
///
/// New tasks start in [`TaskStatus::Todo`] unless created from a specific
/// column.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    assignee: Option<AssigneeRef>,
    priority: TaskPriority,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    estimated_hours: f64,
    created_by: Option<ProfileId>,
}

impl NewTask {
    /// Creates a draft with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            project_id,
            title: trimmed.to_owned(),
            description: None,
            assignee: None,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
            due_date: None,
            estimated_hours: 0.0,
            created_by: None,
        })
    }

    /// Sets the initial status, typically the column the task was added to.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: AssigneeRef) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the creator profile.
    #[must_use]
    pub const fn with_created_by(mut self, created_by: ProfileId) -> Self {
        self.created_by = Some(created_by);
        self
    }

    /// Sets the effort estimate.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidHours`] for negative or non-finite
    /// values.
    pub fn with_estimated_hours(mut self, hours: f64) -> Result<Self, TaskDomainError> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(TaskDomainError::InvalidHours(hours));
        }
        self.estimated_hours = hours;
        Ok(self)
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}
