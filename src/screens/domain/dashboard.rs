//! Dashboard data and its derived lists.

use crate::reference::domain::{Project, Task, Team, User};
use crate::view::{
    domain::{ProjectFilter, ProjectTaskCounts, SortKey, TaskFilter},
    services::{derive, filter_projects, project_task_counts},
};

/// Everything the dashboard loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    /// All tasks.
    pub tasks: Vec<Task>,
    /// All projects.
    pub projects: Vec<Project>,
    /// All teams; empty when the team fetch degraded.
    pub teams: Vec<Team>,
    /// Signed-in user at load time.
    pub viewer: Option<User>,
}

impl DashboardData {
    /// The viewer's tasks satisfying `filters`, in loaded order. Empty
    /// without a viewer.
    #[must_use]
    pub fn my_tasks(&self, filters: &[TaskFilter]) -> Vec<&Task> {
        let Some(viewer) = &self.viewer else {
            return Vec::new();
        };
        let mut all = Vec::with_capacity(filters.len().saturating_add(1));
        all.push(TaskFilter::current_user(viewer));
        all.extend_from_slice(filters);
        derive(&self.tasks, &all, SortKey::Unsorted)
    }

    /// Projects satisfying `filters`, in loaded order.
    #[must_use]
    pub fn projects(&self, filters: &[ProjectFilter]) -> Vec<&Project> {
        filter_projects(&self.projects, &self.tasks, filters)
    }

    /// Task counts for one project card.
    #[must_use]
    pub fn counts(&self, project_id: &str) -> ProjectTaskCounts {
        project_task_counts(&self.tasks, project_id)
    }
}
