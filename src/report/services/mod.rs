//! Report aggregation services.

mod aggregate;

pub use aggregate::{aggregate_by_day, grouped_chart, top_n};
