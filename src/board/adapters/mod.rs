//! Adapters implementing the board ports.
//!
//! - [`memory::InMemoryTaskDatastore`]: thread-safe in-memory datastore with
//!   failure injection
//! - [`memory::RecordingNotifier`]: keeps failures for inspection
//! - [`logging::LoggingNotifier`]: forwards failures to `tracing`

pub mod logging;
pub mod memory;
