//! Task, team, project and member drafts with their wire payloads.

use super::ValidationError;
use crate::reference::domain::{Task, TaskStatus};
use serde::Serialize;

/// Estimated days used when a draft gives none or a non-positive value.
pub const DEFAULT_TIME_TO_COMPLETE: u32 = 1;

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Task form contents before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task name.
    pub name: String,
    /// Team id.
    pub team: String,
    /// Project id.
    pub project: String,
    /// Owner ids.
    pub owners: Vec<String>,
    /// Tag values.
    pub tags: Vec<String>,
    /// Estimated days, as entered.
    pub time_to_complete: Option<i64>,
    /// Workflow status; `To Do` when unset.
    pub status: Option<TaskStatus>,
}

impl TaskDraft {
    /// Pre-fills a draft for editing `task`, taking reference ids whatever
    /// shape they arrived in.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            name: task.name().to_owned(),
            team: task.team().id().to_owned(),
            project: task.project().id().to_owned(),
            owners: task
                .owners()
                .iter()
                .filter(|owner| owner.is_resolved())
                .map(|owner| owner.id().to_owned())
                .collect(),
            tags: task.tags().iter().map(|tag| tag.value().to_owned()).collect(),
            time_to_complete: task.time_to_complete().map(i64::from),
            status: task.status(),
        }
    }

    /// Checks required fields and applies defaults.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in form order: name, team,
    /// project, owners.
    pub fn validate(&self) -> Result<TaskPayload, ValidationError> {
        let name = non_blank(&self.name).ok_or(ValidationError::MissingTaskName)?;
        let team = non_blank(&self.team).ok_or(ValidationError::MissingTeam)?;
        let project = non_blank(&self.project).ok_or(ValidationError::MissingProject)?;
        let owners: Vec<String> = self
            .owners
            .iter()
            .filter_map(|owner| non_blank(owner))
            .map(str::to_owned)
            .collect();
        if owners.is_empty() {
            return Err(ValidationError::MissingOwner);
        }
        let time_to_complete = self
            .time_to_complete
            .and_then(|days| u32::try_from(days).ok())
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_TIME_TO_COMPLETE);
        Ok(TaskPayload {
            name: name.to_owned(),
            team: team.to_owned(),
            project: project.to_owned(),
            owners,
            tags: self.tags.clone(),
            time_to_complete,
            status: self.status.unwrap_or(TaskStatus::ToDo),
        })
    }
}

/// Body of `POST /tasks` and `PUT /tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Trimmed task name.
    pub name: String,
    /// Team id.
    pub team: String,
    /// Project id.
    pub project: String,
    /// Owner ids.
    pub owners: Vec<String>,
    /// Tag values.
    pub tags: Vec<String>,
    /// Estimated days, at least one.
    pub time_to_complete: u32,
    /// Workflow status.
    pub status: TaskStatus,
}

/// Team form contents before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDraft {
    /// Team name.
    pub name: String,
    /// Optional description.
    pub description: String,
}

impl TeamDraft {
    /// Checks the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingTeamName`] for a blank name.
    pub fn validate(&self) -> Result<TeamPayload, ValidationError> {
        let name = non_blank(&self.name).ok_or(ValidationError::MissingTeamName)?;
        Ok(TeamPayload {
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
        })
    }
}

/// Body of `POST /teams` and `PUT /teams/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPayload {
    /// Trimmed team name.
    pub name: String,
    /// Trimmed description, possibly empty.
    pub description: String,
}

/// Project form contents before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: String,
}

impl ProjectDraft {
    /// Checks the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingProjectName`] for a blank name.
    pub fn validate(&self) -> Result<ProjectPayload, ValidationError> {
        let name = non_blank(&self.name).ok_or(ValidationError::MissingProjectName)?;
        Ok(ProjectPayload {
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
        })
    }
}

/// Body of `POST /projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPayload {
    /// Trimmed project name.
    pub name: String,
    /// Trimmed description, possibly empty.
    pub description: String,
}

/// Body of `POST /teams/{id}/members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPayload {
    /// User to add.
    pub user_id: String,
}

impl MemberPayload {
    /// Builds the payload for adding `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingMember`] for a blank id.
    pub fn for_user(user_id: &str) -> Result<Self, ValidationError> {
        let id = non_blank(user_id).ok_or(ValidationError::MissingMember)?;
        Ok(Self {
            user_id: id.to_owned(),
        })
    }
}
