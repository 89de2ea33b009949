//! Screen batches and the shared loader.

mod dashboard;
mod loader;
mod project_detail;
mod reports;
mod teams;

pub use dashboard::DashboardBatch;
pub use loader::{ScreenBatch, ScreenLoader};
pub use project_detail::ProjectDetailBatch;
pub use reports::ReportsBatch;
pub use teams::TeamsBatch;
