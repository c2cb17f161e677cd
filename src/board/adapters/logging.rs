//! Notifier that reports failed status changes through `tracing`.

use tracing::warn;

use crate::board::ports::{StatusChangeFailure, StatusChangeNotifier};

/// Emits a `warn` event for every failed status change.
///
/// Useful for headless boards and as a fallback when no toast layer is
/// attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

impl StatusChangeNotifier for LoggingNotifier {
    fn status_change_failed(&self, failure: &StatusChangeFailure) {
        warn!(
            task_id = %failure.task_id,
            attempted = %failure.attempted,
            reason = %failure.reason,
            "task status update failed"
        );
    }
}
