//! Client configuration.
//!
//! Configuration is read from TOML and may be overridden by environment
//! variables:
//!
//! | Key | Environment variable | Default |
//! |---|---|---|
//! | `base_url` | `WORKASANA_API_URL` | `https://backend3-project.vercel.app` |
//! | `request_timeout_secs` | `WORKASANA_TIMEOUT_SECS` | `30` |
//! | `report_window_days` | | `7` |
//! | `owner_chart_limit` | | `10` |

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "WORKASANA_API_URL";

/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "WORKASANA_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://backend3-project.vercel.app";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REPORT_WINDOW_DAYS: u32 = 7;
const DEFAULT_OWNER_CHART_LIMIT: usize = 10;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid configuration file: {0}")]
    Parse(String),

    /// The base URL is empty after trimming.
    #[error("API base URL must not be empty")]
    EmptyBaseUrl,

    /// The base URL does not use an HTTP scheme.
    #[error("invalid API base URL '{0}', expected http:// or https://")]
    InvalidBaseUrl(String),

    /// The timeout override is not a positive integer.
    #[error("invalid request timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Settings for talking to the Workasana API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    base_url: String,
    request_timeout_secs: u64,
    report_window_days: u32,
    owner_chart_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            report_window_days: DEFAULT_REPORT_WINDOW_DAYS,
            owner_chart_limit: DEFAULT_OWNER_CHART_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the base URL is invalid.
    pub fn for_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
        .validated()
    }

    /// Parses and validates a TOML document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and validation
    /// errors for invalid values.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(document)
            .map_err(|err| ConfigError::Parse(err.to_string()))?
            .validated()
    }

    /// Applies environment overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override is invalid.
    pub fn with_process_env(self) -> Result<Self, ConfigError> {
        self.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override is invalid.
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(API_URL_ENV) {
            self.base_url = url;
        }
        if let Some(raw_timeout) = lookup(TIMEOUT_ENV) {
            self.request_timeout_secs = raw_timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(raw_timeout))?;
        }
        self.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let normalized = self.base_url.trim().trim_end_matches('/').to_owned();
        if normalized.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(normalized.starts_with("http://") || normalized.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(normalized));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("0".to_owned()));
        }
        self.base_url = normalized;
        Ok(self)
    }

    /// Returns the API base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the default report window length in days.
    #[must_use]
    pub const fn report_window_days(&self) -> u32 {
        self.report_window_days
    }

    /// Returns how many owners the owner chart shows.
    #[must_use]
    pub const fn owner_chart_limit(&self) -> usize {
        self.owner_chart_limit
    }
}
