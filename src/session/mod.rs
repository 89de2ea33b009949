//! Session state for authenticated access to the Workasana API.
//!
//! The session holds the bearer credential and cached user profile that every
//! outbound call depends on, plus display preferences with an independent
//! lifecycle. State lives behind a key/value [`ports::SessionStore`] so the
//! process-wide storage mechanism stays outside this crate. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The session context service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
