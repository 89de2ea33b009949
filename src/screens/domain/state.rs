//! Visible load state of a screen.

use crate::gateway::domain::GatewayError;
use thiserror::Error;

/// Why a screen has no data to show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The session was evicted; the user must sign in again.
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,
    /// A primary resource failed; the message is shown with a retry action.
    #[error("{0}")]
    Unavailable(String),
}

impl LoadError {
    /// Returns `true` when retrying may help.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Maps a primary-resource failure, keeping session expiry distinct.
    #[must_use]
    pub fn from_primary(err: &GatewayError, message: &str) -> Self {
        if err.is_session_expired() {
            Self::SessionExpired
        } else {
            Self::Unavailable(message.to_owned())
        }
    }
}

/// What a screen currently shows.
#[derive(Debug, Clone)]
pub enum ScreenState<D> {
    /// Data loaded, possibly with degraded auxiliary parts.
    Ready(D),
    /// Load failed.
    Failed(LoadError),
}

impl<D> ScreenState<D> {
    /// Returns the loaded data.
    #[must_use]
    pub const fn data(&self) -> Option<&D> {
        match self {
            Self::Ready(data) => Some(data),
            Self::Failed(_) => None,
        }
    }

    /// Returns the load error.
    #[must_use]
    pub const fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Ready(_) => None,
        }
    }
}

impl<D> From<Result<D, LoadError>> for ScreenState<D> {
    fn from(result: Result<D, LoadError>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(err) => Self::Failed(err),
        }
    }
}
