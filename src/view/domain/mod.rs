//! Domain model for view derivation.

mod counts;
mod filter;
mod options;
mod sort;

pub use counts::ProjectTaskCounts;
pub use filter::{ProjectFilter, TaskFilter};
pub use options::FilterOptions;
pub use sort::{SortKey, priority_rank, status_rank};
