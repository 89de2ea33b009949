//! View derivation services.

mod derive;
mod projects;
mod roster;

pub use derive::{derive, filter_options, sort_tasks};
pub use projects::{filter_projects, project_task_counts, tasks_in_project};
pub use roster::roster_candidates;
