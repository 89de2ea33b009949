//! Concurrent resource fetching for Workasana screens.
//!
//! A screen asks for a batch of independent remote reads. The batch is issued
//! without waiting between members, every member is allowed to settle, and
//! each result is delivered under its name. A per-resource role then decides
//! whether a failure is fatal or degrades to a documented default. Batches
//! carry sequence numbers so a slow, older batch never overwrites a newer
//! one. The module follows hexagonal architecture:
//!
//! - Roles, outcomes and sequencing types in [`domain`]
//! - The fetcher, degrade policy and sequenced result slot in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
