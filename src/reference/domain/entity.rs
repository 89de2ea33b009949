//! Normalized entities consumed by view derivation and reporting.
//!
//! Instances are only built by the normalizer; downstream code never mutates
//! them and derives new collections of references instead.

use super::{CanonicalRef, ParsePriorityError, ParseTaskStatusError, TagRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "To Do")]
    ToDo,
    /// Work is underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "Completed")]
    Completed,
    /// Work is stuck on something external.
    #[serde(rename = "Blocked")]
    Blocked,
}

impl TaskStatus {
    /// All statuses in workflow order.
    pub const ALL: [Self; 4] = [Self::ToDo, Self::InProgress, Self::Completed, Self::Blocked];

    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Blocked => "Blocked",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "To Do" => Ok(Self::ToDo),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Blocked" => Ok(Self::Blocked),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Most urgent.
    High,
    /// Default urgency.
    Medium,
    /// Least urgent.
    Low,
}

impl Priority {
    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) status: Option<TaskStatus>,
    pub(crate) priority: Option<Priority>,
    pub(crate) owners: Vec<CanonicalRef>,
    pub(crate) tags: Vec<TagRef>,
    pub(crate) project: CanonicalRef,
    pub(crate) team: CanonicalRef,
    pub(crate) due_date: Option<DateTime<Utc>>,
    pub(crate) created_at: Option<DateTime<Utc>>,
    pub(crate) updated_at: Option<DateTime<Utc>>,
    pub(crate) time_to_complete: Option<u32>,
}

impl Task {
    /// Returns the remote identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status, or `None` when unset or unrecognised.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority, or `None` when unset or unrecognised.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the canonical owner references.
    #[must_use]
    pub fn owners(&self) -> &[CanonicalRef] {
        &self.owners
    }

    /// Returns the normalized tags.
    #[must_use]
    pub fn tags(&self) -> &[TagRef] {
        &self.tags
    }

    /// Returns the canonical project reference.
    #[must_use]
    pub const fn project(&self) -> &CanonicalRef {
        &self.project
    }

    /// Returns the canonical team reference.
    #[must_use]
    pub const fn team(&self) -> &CanonicalRef {
        &self.team
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp, if any.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the latest update timestamp, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns the estimated days to complete, if any.
    #[must_use]
    pub const fn time_to_complete(&self) -> Option<u32> {
        self.time_to_complete
    }

    /// Returns `true` when any owner reference has the given identifier.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        !user_id.is_empty() && self.owners.iter().any(|owner| owner.id() == user_id)
    }
}

/// Normalized project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Returns the remote identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp, if any.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

/// Normalized team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<CanonicalRef>,
}

impl Team {
    /// Returns the remote identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the canonical member references.
    #[must_use]
    pub fn members(&self) -> &[CanonicalRef] {
        &self.members
    }

    /// Returns `true` when the team already lists the given user.
    #[must_use]
    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|member| member.id() == user_id)
    }
}

/// Normalized user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: String,
    name: String,
    email: Option<String>,
}

impl User {
    /// Creates a user.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email,
        }
    }

    /// Builds a user from a canonical owner or member reference.
    #[must_use]
    pub fn from_reference(reference: &CanonicalRef) -> Self {
        Self::new(
            reference.id(),
            reference.display_name(),
            reference.email().map(str::to_owned),
        )
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address, if known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
