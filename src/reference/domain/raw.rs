//! Wire shapes for entities as the remote service returns them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A relationship field as received: a bare identifier, an embedded object,
/// or something else entirely.
///
/// The `Malformed` arm keeps deserialization of the surrounding record from
/// failing when a single reference has an unexpected shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRef {
    /// Bare identifier string.
    Id(String),
    /// Embedded entity object.
    Embedded(EmbeddedEntity),
    /// Any other JSON value.
    Malformed(Value),
}

impl RawRef {
    /// Returns the identifier carried by either shape, if any.
    ///
    /// Numeric identifiers are accepted and rendered as decimal strings.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self {
            Self::Id(id) => non_blank(id),
            Self::Embedded(entity) => entity.id(),
            Self::Malformed(Value::Number(number)) => Some(number.to_string()),
            Self::Malformed(_) => None,
        }
    }
}

impl From<&str> for RawRef {
    fn from(value: &str) -> Self {
        Self::Id(value.to_owned())
    }
}

/// Embedded entity object carrying at least an identifier.
///
/// The remote service uses `_id`; some payloads use `id`. Both are accepted
/// and `_id` wins when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedEntity {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    underscore_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl EmbeddedEntity {
    /// Creates an embedded entity with an identifier and optional name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            underscore_id: Some(id.into()),
            id: None,
            name,
            email: None,
        }
    }

    /// Returns the identifier, preferring `_id` over `id`.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.underscore_id
            .as_deref()
            .and_then(non_blank)
            .or_else(|| self.id.as_deref().and_then(non_blank))
    }

    /// Returns the display name, if present and non-blank.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }

    /// Returns the email address, if present.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.trim().is_empty())
    }
}

/// A tag as received: a bare label or an `{id, name}` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTag {
    /// Bare tag label.
    Label(String),
    /// Tag object.
    Object(EmbeddedEntity),
    /// Any other JSON value.
    Malformed(Value),
}

/// Task record as received from `GET /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    /// Remote identifier.
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Task name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Workflow status label.
    #[serde(default)]
    pub status: Option<String>,
    /// Priority label.
    #[serde(default)]
    pub priority: Option<String>,
    /// Owner references.
    #[serde(default, deserialize_with = "null_as_default")]
    pub owners: Vec<RawRef>,
    /// Tags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<RawTag>,
    /// Project reference.
    #[serde(default)]
    pub project: Option<RawRef>,
    /// Team reference.
    #[serde(default)]
    pub team: Option<RawRef>,
    /// Due date as an ISO 8601 date or timestamp.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Latest update timestamp; used as the completion time for completed tasks.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Estimated days to complete.
    #[serde(default)]
    pub time_to_complete: Option<i64>,
}

/// Project record as received from `GET /projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    /// Remote identifier.
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Project name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Team record as received from `GET /teams`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTeam {
    /// Remote identifier.
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Team name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Member references.
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<RawRef>,
}

/// User profile as returned by the auth endpoints and stored in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    /// Remote identifier.
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// Reads an explicit `null` as the field's default, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
