//! Error taxonomy for gateway calls.

use crate::session::services::SessionError;
use thiserror::Error;

/// Message shown when a failure carries no server-supplied message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Result type for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors surfaced by the gateway.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The credential was rejected. The session has already been evicted;
    /// callers should send the user back to sign-in.
    #[error("session expired (HTTP {status})")]
    SessionExpired {
        /// Status code that triggered eviction (401 or 403).
        status: u16,
    },

    /// Any other non-2xx status, transport failure or undecodable body.
    #[error(transparent)]
    RequestFailed(RequestFailure),

    /// Session state could not be read.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl GatewayError {
    /// Returns `true` for [`GatewayError::SessionExpired`].
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }

    /// Returns the message to show the user, preferring the server's.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::SessionExpired { .. } => "Your session has expired. Please log in again.",
            Self::RequestFailed(failure) => failure.user_message(),
            Self::Session(_) => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl From<RequestFailure> for GatewayError {
    fn from(failure: RequestFailure) -> Self {
        Self::RequestFailed(failure)
    }
}

/// What went wrong with a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// The server answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// A request failure with the optional server-supplied message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request failed: {kind}")]
pub struct RequestFailure {
    kind: FailureKind,
    server_message: Option<String>,
}

impl RequestFailure {
    /// Creates a failure for a non-2xx status.
    #[must_use]
    pub fn status(status: u16, server_message: Option<String>) -> Self {
        Self {
            kind: FailureKind::Status(status),
            server_message,
        }
    }

    /// Creates a failure for a transport error.
    #[must_use]
    pub fn transport(cause: impl ToString) -> Self {
        Self {
            kind: FailureKind::Transport(cause.to_string()),
            server_message: None,
        }
    }

    /// Creates a failure for an undecodable body.
    #[must_use]
    pub fn decode(cause: impl ToString) -> Self {
        Self {
            kind: FailureKind::Decode(cause.to_string()),
            server_message: None,
        }
    }

    /// Returns the failure kind.
    #[must_use]
    pub const fn kind(&self) -> &FailureKind {
        &self.kind
    }

    /// Returns the HTTP status when the server answered.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Status(status) => Some(status),
            FailureKind::Transport(_) | FailureKind::Decode(_) => None,
        }
    }

    /// Returns the server-supplied message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.server_message.as_deref()
    }

    /// Returns the server message or `fallback`.
    #[must_use]
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }

    /// Returns the server message or [`GENERIC_FAILURE_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> &str {
        self.message_or(GENERIC_FAILURE_MESSAGE)
    }
}
