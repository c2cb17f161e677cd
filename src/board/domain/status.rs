//! Workflow status and priority enumerations.

use super::{ParseTaskPriorityError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a task in the kanban pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task is awaiting review.
    InReview,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Board columns in display order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::InReview, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::InReview => "in_review",
            Self::Done => "done",
        }
    }

    /// Returns the column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "Da fare",
            Self::InProgress => "In corso",
            Self::InReview => "In revisione",
            Self::Done => "Completato",
        }
    }

    /// Returns the zero-based column index of this status.
    #[must_use]
    pub const fn column_index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::InReview => 2,
            Self::Done => 3,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "in_review" => Ok(Self::InReview),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task urgency shown on cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal priority.
    #[default]
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs immediate attention.
    Urgent,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Returns the badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Bassa",
            Self::Medium => "Media",
            Self::High => "Alta",
            Self::Urgent => "Urgente",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}
