//! Domain model for batch fetching.

mod batch;
mod outcome;
mod role;
mod sequence;

pub use batch::{BatchResults, NamedRequest};
pub use outcome::ResourceOutcome;
pub use role::ResourceRole;
pub use sequence::{BatchSequencer, BatchTicket};
