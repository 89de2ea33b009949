//! Project detail data.

use crate::reference::domain::{Project, Task};
use crate::view::{
    domain::{FilterOptions, SortKey, TaskFilter},
    services::{derive, filter_options},
};

/// A project and its tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    /// The project.
    pub project: Project,
    /// Tasks whose project reference is this project.
    pub tasks: Vec<Task>,
}

impl ProjectDetail {
    /// Owners and tags offered by the filter controls.
    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        filter_options(&self.tasks)
    }

    /// Tasks satisfying `filters`, ordered by `sort`.
    #[must_use]
    pub fn view(&self, filters: &[TaskFilter], sort: SortKey) -> Vec<&Task> {
        derive(&self.tasks, filters, sort)
    }
}
