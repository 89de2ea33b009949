//! Project list derivation and per-project task figures.

use crate::reference::domain::{Project, Task, TaskStatus};
use crate::view::domain::{ProjectFilter, ProjectTaskCounts};

/// Keeps the projects satisfying every filter, in input order.
#[must_use]
pub fn filter_projects<'a>(
    projects: &'a [Project],
    tasks: &[Task],
    filters: &[ProjectFilter],
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| filters.iter().all(|filter| filter.matches(project, tasks)))
        .collect()
}

/// Tasks whose project reference id equals `project_id`, in input order.
///
/// An empty id matches nothing, so tasks with an unresolved project are never
/// attributed to a project.
#[must_use]
pub fn tasks_in_project<'a>(tasks: &'a [Task], project_id: &str) -> Vec<&'a Task> {
    if project_id.is_empty() {
        return Vec::new();
    }
    tasks
        .iter()
        .filter(|task| task.project().id() == project_id)
        .collect()
}

/// Counts the tasks of `project_id` by status.
#[must_use]
pub fn project_task_counts(tasks: &[Task], project_id: &str) -> ProjectTaskCounts {
    tasks_in_project(tasks, project_id)
        .into_iter()
        .fold(ProjectTaskCounts::default(), |mut counts, task| {
            counts.total = counts.total.saturating_add(1);
            match task.status() {
                Some(TaskStatus::ToDo) => counts.to_do = counts.to_do.saturating_add(1),
                Some(TaskStatus::InProgress) => {
                    counts.in_progress = counts.in_progress.saturating_add(1);
                }
                Some(TaskStatus::Completed) => {
                    counts.completed = counts.completed.saturating_add(1);
                }
                Some(TaskStatus::Blocked) | None => {}
            }
            counts
        })
}
