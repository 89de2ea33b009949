//! Report aggregation for the Workasana reports screen.
//!
//! Completed tasks are bucketed by the viewer's calendar day; server-grouped
//! counts are labelled and windowed but never re-sorted. The pending-work
//! estimate applies a configurable factor to the server's pending totals.
//!
//! - Buckets, grouped counts, pending work, date range and snapshot in
//!   [`domain`]
//! - Day aggregation and windowing in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
