//! Server-grouped completion counts.

use serde::{Deserialize, Serialize};

/// Dimension a grouped report query groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// Grouped by team.
    Team,
    /// Grouped by task owner.
    Owner,
    /// Grouped by project.
    Project,
}

impl GroupKind {
    /// Every grouping, in report order.
    pub const ALL: [Self; 3] = [Self::Team, Self::Owner, Self::Project];

    /// Value of the `groupBy` query parameter.
    #[must_use]
    pub const fn query_value(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Owner => "owners",
            Self::Project => "project",
        }
    }

    /// Label shown for a group without a name.
    #[must_use]
    pub const fn unknown_label(self) -> &'static str {
        match self {
            Self::Team => "Unknown Team",
            Self::Owner => "Unknown Owner",
            Self::Project => "Unknown Project",
        }
    }
}

/// One row of a grouped report, in the order the server sorted it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedCount {
    /// Group name, if the server supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tasks in the group.
    pub count: u64,
}

impl GroupedCount {
    /// Creates a named row.
    #[must_use]
    pub fn named(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: Some(name.into()),
            count,
        }
    }

    /// Returns the display label, falling back to `kind`'s unknown label for
    /// a missing or blank name.
    #[must_use]
    pub fn label(&self, kind: GroupKind) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| kind.unknown_label())
    }
}
