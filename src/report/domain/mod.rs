//! Domain model for report aggregation.

mod bucket;
mod grouped;
mod pending;
mod range;
mod snapshot;

pub use bucket::ReportBucket;
pub use grouped::{GroupKind, GroupedCount};
pub use pending::{PENDING_ESTIMATE_FACTOR, PendingWork};
pub use range::{ReportDateRange, ReportRangeError};
pub use snapshot::{ReportSnapshot, ReportSummary};
