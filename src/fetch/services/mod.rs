//! Batch fetching services.

mod fetcher;
mod policy;
mod slot;

pub use fetcher::{ConcurrentFetcher, join_named};
pub use policy::resolve;
pub use slot::SequencedSlot;
