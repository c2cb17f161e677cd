//! In-memory adapters for the board ports.

mod datastore;
mod notifier;

pub use datastore::{InMemoryTaskDatastore, StatusWrite};
pub use notifier::RecordingNotifier;
