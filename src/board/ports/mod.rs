//! Port contracts for the kanban board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod datastore;
pub mod notifier;

pub use datastore::{TaskDatastore, TaskDatastoreError, TaskDatastoreResult};
pub use notifier::{StatusChangeFailure, StatusChangeNotifier};

#[cfg(test)]
pub use datastore::MockTaskDatastore;
