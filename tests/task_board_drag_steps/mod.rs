//! Step definitions for board drag scenarios.

mod given;
mod then;
mod when;
pub mod world;
