//! Task and project predicates.

use crate::reference::domain::{Project, Task, TaskStatus, User};

/// One predicate over tasks. A filter list is a conjunction.
///
/// "Show everything" for a control is expressed by leaving its filter out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    /// Status equals the given value. Tasks without a recognized status
    /// never match.
    Status(TaskStatus),
    /// Some owner's canonical id equals the given id.
    Owner(String),
    /// Some tag's value equals the given value.
    Tag(String),
    /// Case-insensitive substring of the name, description, project name or
    /// a tag label. A blank needle matches every task.
    Text(String),
}

impl TaskFilter {
    /// Keeps tasks assigned to `user`.
    #[must_use]
    pub fn current_user(user: &User) -> Self {
        Self::Owner(user.id().to_owned())
    }

    /// Returns `true` when `task` satisfies the predicate.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Status(status) => task.status() == Some(*status),
            Self::Owner(owner_id) => task.is_owned_by(owner_id),
            Self::Tag(value) => task.tags().iter().any(|tag| tag.value() == value),
            Self::Text(needle) => text_matches(task, needle),
        }
    }
}

fn text_matches(task: &Task, needle: &str) -> bool {
    let lowered = needle.trim().to_lowercase();
    if lowered.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(&lowered);
    contains(task.name())
        || task.description().is_some_and(contains)
        || (task.project().is_resolved() && contains(task.project().display_name()))
        || task.tags().iter().any(|tag| contains(tag.label()))
}

/// One predicate over projects. A filter list is a conjunction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFilter {
    /// At least one of the project's tasks has the given status.
    HasTaskWithStatus(TaskStatus),
    /// Case-insensitive substring of the name or description. A blank needle
    /// matches every project.
    Text(String),
}

impl ProjectFilter {
    /// Returns `true` when `project` satisfies the predicate, judged against
    /// the full task list.
    #[must_use]
    pub fn matches(&self, project: &Project, tasks: &[Task]) -> bool {
        match self {
            Self::HasTaskWithStatus(status) => tasks
                .iter()
                .any(|task| task.project().id() == project.id() && task.status() == Some(*status)),
            Self::Text(needle) => {
                let lowered = needle.trim().to_lowercase();
                lowered.is_empty()
                    || project.name().to_lowercase().contains(&lowered)
                    || project
                        .description()
                        .is_some_and(|description| description.to_lowercase().contains(&lowered))
            }
        }
    }
}
