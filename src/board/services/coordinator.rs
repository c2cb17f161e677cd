//! Optimistic status mutation with rollback on persistence failure.
//!
//! A move runs in three phases: [`StatusMutationCoordinator::begin`] changes
//! the local store and returns a [`PendingStatusChange`],
//! [`StatusMutationCoordinator::persist`] performs the remote write, and
//! [`StatusMutationCoordinator::settle`] reconciles the store with the
//! outcome. Only `persist` suspends, so several moves can be in flight while
//! the store stays under exclusive `&mut` access.

use crate::board::{
    domain::{StatusChangeRequest, TaskId, TaskStatus, TaskStore},
    ports::{StatusChangeFailure, StatusChangeNotifier, TaskDatastore, TaskDatastoreResult},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::RollbackPolicy;

/// A status change applied locally whose remote write has not settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingStatusChange {
    task_id: TaskId,
    previous: TaskStatus,
    attempted: TaskStatus,
    revision: u64,
}

impl PendingStatusChange {
    /// Returns the task being moved.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the status a rollback restores.
    #[must_use]
    pub const fn previous(&self) -> TaskStatus {
        self.previous
    }

    /// Returns the status being persisted.
    #[must_use]
    pub const fn attempted(&self) -> TaskStatus {
        self.attempted
    }

    /// Returns the store revision written by the optimistic change.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

/// A pending change together with the outcome of its remote write.
#[derive(Debug, Clone)]
pub struct SettledStatusChange {
    /// The change that was persisted.
    pub pending: PendingStatusChange,
    /// Result of the remote write.
    pub outcome: TaskDatastoreResult<()>,
}

/// How the store was reconciled with a settled write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// The write succeeded; the optimistic status stands.
    Committed,
    /// The write failed and the task was put back.
    RolledBack {
        /// Status the task was restored to.
        restored: TaskStatus,
    },
    /// The write failed but the task had moved again, so it was left alone.
    RollbackSkipped {
        /// Status the task currently holds.
        current: Option<TaskStatus>,
    },
}

/// Applies status changes locally and reconciles them with the datastore.
///
/// This is the only component that writes task statuses to the datastore.
pub struct StatusMutationCoordinator<D, N>
where
    D: TaskDatastore,
    N: StatusChangeNotifier,
{
    datastore: Arc<D>,
    notifier: Arc<N>,
    rollback_policy: RollbackPolicy,
}

impl<D, N> Clone for StatusMutationCoordinator<D, N>
where
    D: TaskDatastore,
    N: StatusChangeNotifier,
{
    fn clone(&self) -> Self {
        Self {
            datastore: Arc::clone(&self.datastore),
            notifier: Arc::clone(&self.notifier),
            rollback_policy: self.rollback_policy,
        }
    }
}

impl<D, N> StatusMutationCoordinator<D, N>
where
    D: TaskDatastore,
    N: StatusChangeNotifier,
{
    /// Creates a coordinator.
    #[must_use]
    pub const fn new(datastore: Arc<D>, notifier: Arc<N>, rollback_policy: RollbackPolicy) -> Self {
        Self {
            datastore,
            notifier,
            rollback_policy,
        }
    }

    /// Returns the rollback policy in effect.
    #[must_use]
    pub const fn rollback_policy(&self) -> RollbackPolicy {
        self.rollback_policy
    }

    /// Applies the requested status to the store.
    ///
    /// Returns `None` when nothing moved (unknown task, or the task already
    /// has the requested status); no write must be issued in that case.
    pub fn begin(
        &self,
        store: &mut TaskStore,
        request: StatusChangeRequest,
    ) -> Option<PendingStatusChange> {
        let StatusChangeRequest { task_id, from, to } = request;
        let previous = store.apply_status(task_id, to);
        if previous == to {
            debug!(%task_id, status = %to, "status change skipped, nothing to move");
            return None;
        }
        if previous != from {
            warn!(
                %task_id,
                requested_from = %from,
                store_from = %previous,
                "store diverged from drag request, rollback uses store status"
            );
        }
        let revision = store.revision_of(task_id).unwrap_or_default();
        debug!(%task_id, from = %previous, %to, revision, "status changed locally");
        Some(PendingStatusChange {
            task_id,
            previous,
            attempted: to,
            revision,
        })
    }

    /// Writes the pending status to the datastore.
    ///
    /// Always runs to completion; errors are carried in the returned value
    /// rather than propagated.
    pub async fn persist(&self, pending: PendingStatusChange) -> SettledStatusChange {
        let outcome = self
            .datastore
            .update_status(pending.task_id, pending.attempted)
            .await;
        SettledStatusChange { pending, outcome }
    }

    /// Reconciles the store with a settled write.
    ///
    /// On failure the task is rolled back to the status it had before the
    /// optimistic change, subject to the rollback policy, and the notifier is
    /// called exactly once.
    pub fn settle(&self, store: &mut TaskStore, settled: SettledStatusChange) -> Reconciliation {
        let SettledStatusChange { pending, outcome } = settled;
        let PendingStatusChange {
            task_id,
            previous,
            attempted,
            revision,
        } = pending;

        let Err(err) = outcome else {
            info!(%task_id, status = %attempted, "task status persisted");
            return Reconciliation::Committed;
        };

        let superseded = store
            .revision_of(task_id)
            .is_some_and(|current| current != revision);
        let reconciliation =
            if superseded && self.rollback_policy == RollbackPolicy::SkipSuperseded {
                let current = store.status_of(task_id);
                warn!(%task_id, %attempted, error = %err, "task moved again, rollback skipped");
                Reconciliation::RollbackSkipped { current }
            } else {
                store.apply_status(task_id, previous);
                warn!(%task_id, %attempted, restored = %previous, error = %err, "task status rolled back");
                Reconciliation::RolledBack { restored: previous }
            };

        self.notifier.status_change_failed(&StatusChangeFailure {
            task_id,
            attempted,
            reason: err.to_string(),
        });
        reconciliation
    }

    /// Runs all three phases for one request.
    ///
    /// Returns `None` when the request did not move anything.
    pub async fn execute(
        &self,
        store: &mut TaskStore,
        request: StatusChangeRequest,
    ) -> Option<Reconciliation> {
        let pending = self.begin(store, request)?;
        let settled = self.persist(pending).await;
        Some(self.settle(store, settled))
    }
}
