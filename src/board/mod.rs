//! Kanban task board engine.
//!
//! Tasks of one project are shown in four status columns. Dragging a card
//! onto another column, or onto a card in another column, moves the task:
//! the local store changes at once, the new status is written to the
//! datastore in the background, and a failed write puts the task back and
//! notifies the user. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
