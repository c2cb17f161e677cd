//! Taskboard: kanban board engine with optimistic status transitions.
//!
//! This crate keeps a project's tasks in four status columns and moves them
//! between columns through a drag gesture. Moves are applied locally before
//! they are persisted and are rolled back when the datastore rejects them.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Tasks, statuses, the column projection and the drag state
//!   machine, with no infrastructure dependencies
//! - **Ports**: Trait interfaces for the task datastore and failure
//!   notifications
//! - **Adapters**: In-memory datastore, recording notifier and a
//!   `tracing`-backed notifier
//!
//! # Modules
//!
//! - [`board`]: Task board domain, ports, adapters and services

pub mod board;
