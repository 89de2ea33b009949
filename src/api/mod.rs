//! Typed Workasana endpoints and client-side validation of mutations.
//!
//! Forms are captured as drafts and validated locally into wire payloads; a
//! draft that fails validation never reaches the network. Every call goes
//! through the authenticated gateway, except the credential exchanges which
//! are sent anonymously.
//!
//! - Drafts, payloads, validation errors and request routes in [`domain`]
//! - The endpoint client and the sign-in flow in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
