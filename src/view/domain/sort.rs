//! Sort keys and their rank tables.

use crate::reference::domain::{Priority, TaskStatus};

/// Ordering applied after filtering. Every ordering is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Ascending by due date, falling back to the creation date. Tasks with
    /// neither date go last.
    #[default]
    DueDate,
    /// Descending by [`priority_rank`].
    Priority,
    /// Descending by [`status_rank`]: further along sorts first.
    Status,
    /// Input order is kept.
    Unsorted,
}

impl SortKey {
    /// Parses a control value. Unknown values keep input order.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "dueDate" => Self::DueDate,
            "priority" => Self::Priority,
            "status" => Self::Status,
            _ => Self::Unsorted,
        }
    }
}

/// Rank of a priority: High 3, Medium 2, Low 1, unset 0.
#[must_use]
pub const fn priority_rank(priority: Option<Priority>) -> u8 {
    match priority {
        Some(Priority::High) => 3,
        Some(Priority::Medium) => 2,
        Some(Priority::Low) => 1,
        None => 0,
    }
}

/// Workflow-progress rank: Completed 4, In Progress 3, Blocked 2, To Do 1,
/// unset 0.
#[must_use]
pub const fn status_rank(status: Option<TaskStatus>) -> u8 {
    match status {
        Some(TaskStatus::Completed) => 4,
        Some(TaskStatus::InProgress) => 3,
        Some(TaskStatus::Blocked) => 2,
        Some(TaskStatus::ToDo) => 1,
        None => 0,
    }
}
