//! Reference normalization for Workasana entities.
//!
//! Relationship fields (task owners, task project and team, team members,
//! tags) arrive from the remote service either as bare identifiers or as
//! embedded objects. This module resolves both shapes into one canonical
//! form at the data boundary so that filters, sorts and equality checks only
//! ever see [`domain::CanonicalRef`] values. The module follows hexagonal
//! architecture:
//!
//! - Wire shapes and normalized entities in [`domain`]
//! - The normalizer in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
