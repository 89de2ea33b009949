//! Profile, password and account forms from the settings screen.

use super::{MIN_PASSWORD_LENGTH, ValidationError};
use crate::reference::domain::User;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Profile form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl ProfileForm {
    /// Pre-fills the form from the signed-in user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name().to_owned(),
            email: user.email().unwrap_or_default().to_owned(),
        }
    }

    /// The fields that differ from `current`, or `None` when nothing changed.
    #[must_use]
    pub fn changes(&self, current: &User) -> Option<ProfileUpdate> {
        let update = ProfileUpdate {
            name: (self.name != current.name()).then(|| self.name.clone()),
            email: (self.email != current.email().unwrap_or_default()).then(|| self.email.clone()),
        };
        (update.name.is_some() || update.email.is_some()).then_some(update)
    }
}

/// Body of `PUT /auth/me`; only changed fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Password change form contents.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordChangeForm {
    /// Password currently in use.
    pub current_password: String,
    /// Replacement password; blank means no change was asked for.
    pub new_password: String,
    /// Replacement password, typed again.
    pub confirm_password: String,
}

impl fmt::Debug for PasswordChangeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChangeForm")
            .field("current_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl PasswordChangeForm {
    /// Checks confirmation, then minimum length. A blank new password asks
    /// for no change and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NewPasswordMismatch`] or
    /// [`ValidationError::NewPasswordTooShort`].
    pub fn validate(&self) -> Result<Option<PasswordChangePayload>, ValidationError> {
        if self.new_password.is_empty() {
            return Ok(None);
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::NewPasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::NewPasswordTooShort);
        }
        Ok(Some(PasswordChangePayload {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        }))
    }
}

/// Body of `PUT /auth/change-password`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangePayload {
    /// Password currently in use.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// File name offered for a personal data export taken on `day`.
#[must_use]
pub fn data_export_file_name(day: NaiveDate) -> String {
    format!("workasana-data-{}.json", day.format("%Y-%m-%d"))
}
