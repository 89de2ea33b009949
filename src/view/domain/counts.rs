//! Per-project task counts.

use serde::Serialize;

/// Task totals for one project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTaskCounts {
    /// Every task of the project.
    pub total: usize,
    /// Tasks in `To Do`.
    pub to_do: usize,
    /// Tasks in `In Progress`.
    pub in_progress: usize,
    /// Tasks in `Completed`.
    pub completed: usize,
}
