//! Authenticated gateway for outbound calls to the Workasana API.
//!
//! Every remote call passes through one shared policy: attach the session
//! credential when present, pass successes through unchanged, evict the
//! session on an authorization failure and report everything else as a
//! request failure. The module follows hexagonal architecture:
//!
//! - Request, response and error types in [`domain`]
//! - The HTTP transport port in [`ports`]
//! - `reqwest` and scripted in-memory transports in [`adapters`]
//! - The gateway policy in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
