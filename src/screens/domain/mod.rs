//! Domain model for screens.

mod dashboard;
mod project_detail;
mod state;
mod teams;

pub use dashboard::DashboardData;
pub use project_detail::ProjectDetail;
pub use state::{LoadError, ScreenState};
pub use teams::TeamsData;
