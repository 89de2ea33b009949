//! Known-entity index used to resolve bare identifiers to display names.

use super::{Project, Team, User};
use std::collections::HashMap;

/// Lookup table from entity identifier to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceIndex {
    names: HashMap<String, String>,
}

impl ReferenceIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from a set of known users.
    #[must_use]
    pub fn from_users<'a>(users: impl IntoIterator<Item = &'a User>) -> Self {
        users
            .into_iter()
            .map(|user| (user.id().to_owned(), user.name().to_owned()))
            .collect()
    }

    /// Builds an index from a set of known projects.
    #[must_use]
    pub fn from_projects<'a>(projects: impl IntoIterator<Item = &'a Project>) -> Self {
        projects
            .into_iter()
            .map(|project| (project.id().to_owned(), project.name().to_owned()))
            .collect()
    }

    /// Builds an index from a set of known teams.
    #[must_use]
    pub fn from_teams<'a>(teams: impl IntoIterator<Item = &'a Team>) -> Self {
        teams
            .into_iter()
            .map(|team| (team.id().to_owned(), team.name().to_owned()))
            .collect()
    }

    /// Records a display name for an identifier, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    /// Returns the display name recorded for `id`.
    #[must_use]
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Returns the number of indexed entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when the index holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for ReferenceIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .filter(|(id, name)| !id.is_empty() && !name.is_empty())
                .collect(),
        }
    }
}
