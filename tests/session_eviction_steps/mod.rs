//! Step definitions for session eviction scenarios.

mod given;
mod then;
mod when;
pub mod world;
