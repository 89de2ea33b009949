//! Screen loaders composing fetching, degrade policy and derivation.
//!
//! Each screen names the batch it needs and how the settled batch becomes
//! its data. A shared loader issues the batch with a fresh sequence number,
//! applies the result only if it is still the newest, and keeps the visible
//! state. Retrying is loading again.
//!
//! - Screen data, load state and load errors in [`domain`]
//! - The batch trait, the loader and the four screen batches in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
