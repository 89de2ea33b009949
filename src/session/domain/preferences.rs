//! Display preferences stored under `userPreferences`.

use serde::{Deserialize, Serialize};

/// Colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// User display preferences.
///
/// Unknown or missing fields fall back to defaults so that older stored
/// payloads keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayPreferences {
    /// Whether email notifications are enabled.
    pub email_notifications: bool,
    /// Whether desktop notifications are enabled.
    pub desktop_notifications: bool,
    /// Colour theme.
    pub theme: Theme,
    /// Interface language code.
    pub language: String,
    /// IANA time zone name.
    pub timezone: String,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            desktop_notifications: false,
            theme: Theme::Light,
            language: "en".to_owned(),
            timezone: "UTC".to_owned(),
        }
    }
}
