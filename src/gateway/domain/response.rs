//! Response returned by a transport.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Status code and decoded JSON body of a completed HTTP exchange.
///
/// Bodies that are empty or not JSON are represented as [`Value::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    body: Value,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the JSON body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns `true` for statuses denoting "unauthenticated" or "forbidden".
    #[must_use]
    pub const fn is_authorization_failure(&self) -> bool {
        matches!(self.status, 401 | 403)
    }

    /// Returns the server-supplied `{error: string}` message, if present.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }

    /// Decodes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns the decoding error when the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body)
    }
}
