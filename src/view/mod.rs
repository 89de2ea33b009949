//! View derivation over normalized Workasana records.
//!
//! Screens differ only in which filters and sort key they ask for; the
//! derivation itself is one pure function. Outputs are ordered references
//! into the input slice, never altered copies.
//!
//! - Filters, sort keys, rank tables and summary types in [`domain`]
//! - `derive` and the project and roster helpers in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
