//! Notifier that keeps every failure it receives.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::board::ports::{StatusChangeFailure, StatusChangeNotifier};

/// Thread-safe notifier recording failures for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    failures: Arc<Mutex<Vec<StatusChangeFailure>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with no recorded failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the failures received so far, oldest first.
    #[must_use]
    pub fn failures(&self) -> Vec<StatusChangeFailure> {
        self.lock().clone()
    }

    /// Returns how many failures were received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no failure was received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Poisoning leaves the list intact, so it is ignored.
    fn lock(&self) -> MutexGuard<'_, Vec<StatusChangeFailure>> {
        self.failures.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StatusChangeNotifier for RecordingNotifier {
    fn status_change_failed(&self, failure: &StatusChangeFailure) {
        self.lock().push(failure.clone());
    }
}
