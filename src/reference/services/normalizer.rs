//! Resolves polymorphic relationship fields into canonical references.

use crate::reference::domain::{
    CanonicalRef, Priority, Project, RawProject, RawRef, RawTag, RawTask, RawTeam, RawUser,
    RefKind, ReferenceIndex, TagRef, Task, TaskStatus, Team, User,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Normalizes raw records against optional known-entity indexes.
///
/// Normalization is total: every reference-typed field yields a
/// [`CanonicalRef`], falling back to a placeholder when the raw value is
/// missing or malformed.
#[derive(Debug, Clone, Default)]
pub struct ReferenceNormalizer {
    users: ReferenceIndex,
    projects: ReferenceIndex,
    teams: ReferenceIndex,
}

impl ReferenceNormalizer {
    /// Creates a normalizer with no known entities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given index to resolve bare user identifiers.
    #[must_use]
    pub fn with_users(mut self, users: ReferenceIndex) -> Self {
        self.users = users;
        self
    }

    /// Uses the given index to resolve bare project identifiers.
    #[must_use]
    pub fn with_projects(mut self, projects: ReferenceIndex) -> Self {
        self.projects = projects;
        self
    }

    /// Uses the given index to resolve bare team identifiers.
    #[must_use]
    pub fn with_teams(mut self, teams: ReferenceIndex) -> Self {
        self.teams = teams;
        self
    }

    const fn index_for(&self, kind: RefKind) -> &ReferenceIndex {
        match kind {
            RefKind::User => &self.users,
            RefKind::Project => &self.projects,
            RefKind::Team => &self.teams,
        }
    }

    /// Resolves one relationship field.
    ///
    /// - A bare identifier is looked up in the index for `kind`; unknown
    ///   identifiers get a `"{Kind} {id}"` placeholder name.
    /// - An embedded object contributes its identifier and name; the name
    ///   defaults to the identifier.
    /// - Anything without an identifier becomes [`CanonicalRef::unresolved`],
    ///   keeping an embedded name when one exists.
    #[must_use]
    pub fn reference(&self, raw: &RawRef, kind: RefKind) -> CanonicalRef {
        match raw {
            RawRef::Embedded(entity) => {
                let email = entity.email().map(str::to_owned);
                match (entity.id(), entity.name()) {
                    (Some(id), Some(name)) => CanonicalRef::new(id, name).with_email(email),
                    (Some(id), None) => CanonicalRef::new(id.clone(), id).with_email(email),
                    (None, Some(name)) => CanonicalRef::new(String::new(), name),
                    (None, None) => CanonicalRef::unresolved(),
                }
            }
            RawRef::Id(_) | RawRef::Malformed(_) => {
                raw.id().map_or_else(CanonicalRef::unresolved, |id| {
                    let display = self
                        .index_for(kind)
                        .name_of(&id)
                        .map_or_else(|| format!("{} {id}", kind.label()), str::to_owned);
                    CanonicalRef::new(id, display)
                })
            }
        }
    }

    /// Resolves an optional relationship field; absence yields the
    /// unresolved placeholder.
    #[must_use]
    pub fn optional_reference(&self, raw: Option<&RawRef>, kind: RefKind) -> CanonicalRef {
        raw.map_or_else(CanonicalRef::unresolved, |value| self.reference(value, kind))
    }

    /// Normalizes a tag.
    ///
    /// Object tags expose `value = id-or-name` and `label = name-or-id`. Tags
    /// without any usable text are dropped.
    #[must_use]
    pub fn tag(raw: &RawTag) -> Option<TagRef> {
        match raw {
            RawTag::Label(label) => {
                let trimmed = label.trim();
                (!trimmed.is_empty()).then(|| TagRef::plain(trimmed))
            }
            RawTag::Object(entity) => {
                let name = entity.name().map(str::to_owned);
                match (entity.id(), name) {
                    (Some(id), Some(label)) => Some(TagRef::new(id, label)),
                    (Some(id), None) => Some(TagRef::plain(id)),
                    (None, Some(label)) => Some(TagRef::plain(label)),
                    (None, None) => None,
                }
            }
            RawTag::Malformed(Value::Number(number)) => Some(TagRef::plain(number.to_string())),
            RawTag::Malformed(_) => None,
        }
    }

    /// Normalizes a task record.
    #[must_use]
    pub fn task(&self, raw: &RawTask) -> Task {
        Task {
            id: raw.id.clone(),
            name: raw.name.clone(),
            description: raw.description.clone(),
            status: raw
                .status
                .as_deref()
                .and_then(|label| TaskStatus::try_from(label).ok()),
            priority: raw
                .priority
                .as_deref()
                .and_then(|label| Priority::try_from(label).ok()),
            owners: raw
                .owners
                .iter()
                .map(|owner| self.reference(owner, RefKind::User))
                .collect(),
            tags: raw.tags.iter().filter_map(Self::tag).collect(),
            project: self.optional_reference(raw.project.as_ref(), RefKind::Project),
            team: self.optional_reference(raw.team.as_ref(), RefKind::Team),
            due_date: raw.due_date.as_deref().and_then(parse_timestamp),
            created_at: raw.created_at.as_deref().and_then(parse_timestamp),
            updated_at: raw.updated_at.as_deref().and_then(parse_timestamp),
            time_to_complete: raw
                .time_to_complete
                .and_then(|days| u32::try_from(days).ok()),
        }
    }

    /// Normalizes a batch of task records, preserving order.
    #[must_use]
    pub fn tasks(&self, raw: &[RawTask]) -> Vec<Task> {
        raw.iter().map(|task| self.task(task)).collect()
    }

    /// Normalizes a team record.
    #[must_use]
    pub fn team(&self, raw: &RawTeam) -> Team {
        Team {
            id: raw.id.clone(),
            name: raw.name.clone(),
            description: raw.description.clone(),
            members: raw
                .members
                .iter()
                .map(|member| self.reference(member, RefKind::User))
                .collect(),
        }
    }

    /// Normalizes a batch of team records, preserving order.
    #[must_use]
    pub fn teams(&self, raw: &[RawTeam]) -> Vec<Team> {
        raw.iter().map(|team| self.team(team)).collect()
    }

    /// Normalizes a project record.
    #[must_use]
    pub fn project(raw: &RawProject) -> Project {
        Project {
            id: raw.id.clone(),
            name: raw.name.clone(),
            description: raw.description.clone(),
            created_at: raw.created_at.as_deref().and_then(parse_timestamp),
        }
    }

    /// Normalizes a batch of project records, preserving order.
    #[must_use]
    pub fn projects(raw: &[RawProject]) -> Vec<Project> {
        raw.iter().map(Self::project).collect()
    }

    /// Normalizes a user profile; a missing name becomes the `User {id}`
    /// placeholder.
    #[must_use]
    pub fn user(raw: &RawUser) -> User {
        let name = raw
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| format!("{} {}", RefKind::User.label(), raw.id), str::to_owned);
        User::new(raw.id.clone(), name, raw.email.clone())
    }
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
///
/// Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
