//! Canonical reference and tag forms produced by the normalizer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Display name used when a reference carries no usable identifier.
pub const UNRESOLVED_DISPLAY_NAME: &str = "Assigned";

/// The entity kind a relationship field points at.
///
/// The kind only affects placeholder display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// A user (task owner, team member).
    User,
    /// A project.
    Project,
    /// A team.
    Team,
}

impl RefKind {
    /// Returns the label used in placeholder display names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Project => "Project",
            Self::Team => "Team",
        }
    }
}

/// Normalized `{id, displayName}` form of any relationship field.
///
/// Resolved references compare and hash by identifier only, so two
/// references to the same entity are equal whatever shape they arrived in.
/// Unresolved references all share the empty identifier and are told apart
/// by display name as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRef {
    id: String,
    display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl CanonicalRef {
    /// Creates a canonical reference.
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: None,
        }
    }

    /// Creates the placeholder for a reference with no usable identifier.
    ///
    /// The placeholder has an empty identifier, which never equals the
    /// identifier of a real entity.
    #[must_use]
    pub fn unresolved() -> Self {
        Self::new(String::new(), UNRESOLVED_DISPLAY_NAME)
    }

    /// Attaches an email address.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Returns the entity identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the email address when the reference carried one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns `true` when the reference resolved to an identifier.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.id.is_empty()
    }
}

impl PartialEq for CanonicalRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && (self.is_resolved() || self.display_name == other.display_name)
    }
}

impl Eq for CanonicalRef {}

impl Hash for CanonicalRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        if !self.is_resolved() {
            self.display_name.hash(state);
        }
    }
}

impl fmt::Display for CanonicalRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Normalized tag: the value used for filtering and the label shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagRef {
    value: String,
    label: String,
}

impl TagRef {
    /// Creates a tag whose value and label are the same string.
    #[must_use]
    pub fn plain(label: impl Into<String>) -> Self {
        let text: String = label.into();
        Self {
            value: text.clone(),
            label: text,
        }
    }

    /// Creates a tag with distinct value and label.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Returns the filter value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}
