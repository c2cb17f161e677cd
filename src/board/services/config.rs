//! Board configuration.

use crate::board::domain::ActivationConstraint;
use serde::{Deserialize, Serialize};

/// What to do when a failed write comes back for a task that moved again
/// after the write was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollbackPolicy {
    /// Always restore the status the task had before the failed move, even
    /// if a later move has since changed it.
    #[default]
    Restore,
    /// Leave the task alone when a later move superseded the failed one.
    /// The failure is still notified.
    SkipSuperseded,
}

/// Configuration for one task board.
///
/// # Examples
///
/// ```
/// use taskboard::board::services::{BoardConfig, RollbackPolicy};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.rollback_policy, RollbackPolicy::Restore);
/// assert_eq!(config.activation.distance(), 8);
///
/// let guarded = BoardConfig::default().with_rollback_policy(RollbackPolicy::SkipSuperseded);
/// assert_eq!(guarded.rollback_policy, RollbackPolicy::SkipSuperseded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Rollback behaviour for failed status writes.
    pub rollback_policy: RollbackPolicy,
    /// Pointer travel required before a press on a card starts a drag.
    pub activation: ActivationConstraint,
}

impl BoardConfig {
    /// Sets the rollback policy.
    #[must_use]
    pub const fn with_rollback_policy(mut self, rollback_policy: RollbackPolicy) -> Self {
        self.rollback_policy = rollback_policy;
        self
    }

    /// Sets the drag activation distance in pixels.
    #[must_use]
    pub const fn with_activation_distance(mut self, distance: u32) -> Self {
        self.activation = ActivationConstraint::new(distance);
        self
    }
}
