//! Scripted in-memory transport for tests and offline flows.

use crate::gateway::{
    domain::{ApiRequest, ApiResponse, HttpMethod},
    ports::{HttpTransport, OutboundRequest, TransportError, TransportResult},
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// A canned reply for one scripted route.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedReply {
    /// The server answers with a status and JSON body.
    Respond {
        /// HTTP status code.
        status: u16,
        /// JSON body.
        body: Value,
        /// Simulated latency.
        delay: Duration,
    },
    /// No response is produced.
    Fail {
        /// Failure description.
        message: String,
        /// Simulated latency before the failure.
        delay: Duration,
    },
}

impl ScriptedReply {
    /// A `200 OK` reply with the given body.
    #[must_use]
    pub const fn ok(body: Value) -> Self {
        Self::status(200, body)
    }

    /// A reply with an arbitrary status and body.
    #[must_use]
    pub const fn status(status: u16, body: Value) -> Self {
        Self::Respond {
            status,
            body,
            delay: Duration::ZERO,
        }
    }

    /// A non-2xx reply carrying the `{error: message}` payload.
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::status(status, json!({ "error": message }))
    }

    /// A transport failure.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail {
            message: message.into(),
            delay: Duration::ZERO,
        }
    }

    /// Delays the reply by `latency`.
    #[must_use]
    pub fn after(self, latency: Duration) -> Self {
        match self {
            Self::Respond { status, body, .. } => Self::Respond {
                status,
                body,
                delay: latency,
            },
            Self::Fail { message, .. } => Self::Fail {
                message,
                delay: latency,
            },
        }
    }

    const fn delay(&self) -> Duration {
        match self {
            Self::Respond { delay, .. } | Self::Fail { delay, .. } => *delay,
        }
    }
}

#[derive(Debug, Default)]
struct ScriptedState {
    routes: HashMap<(HttpMethod, String), VecDeque<ScriptedReply>>,
    sent: Vec<OutboundRequest>,
}

/// Transport answering from a script of canned replies.
///
/// Routes are keyed by method and `path?query`. Replies for a route are
/// consumed in order; the last one repeats. Unscripted routes answer
/// `404 {"error": "no scripted reply"}`. Every request is recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    state: Arc<RwLock<ScriptedState>>,
}

impl ScriptedTransport {
    /// Creates a transport with no scripted routes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reply for `method` and `route` (`path` or `path?query`).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Other`] when lock acquisition fails.
    pub fn script(
        &self,
        method: HttpMethod,
        route: impl Into<String>,
        reply: ScriptedReply,
    ) -> TransportResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TransportError::other(std::io::Error::other(err.to_string())))?;
        state
            .routes
            .entry((method, route.into()))
            .or_default()
            .push_back(reply);
        Ok(())
    }

    /// Returns every request sent so far, in send order.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Other`] when lock acquisition fails.
    pub fn sent(&self) -> TransportResult<Vec<OutboundRequest>> {
        let state = self
            .state
            .read()
            .map_err(|err| TransportError::other(std::io::Error::other(err.to_string())))?;
        Ok(state.sent.clone())
    }

    fn next_reply(&self, outbound: &OutboundRequest) -> TransportResult<ScriptedReply> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TransportError::other(std::io::Error::other(err.to_string())))?;
        state.sent.push(outbound.clone());
        let key = (outbound.request.method(), route_key(&outbound.request));
        let reply = state.routes.get_mut(&key).and_then(|queue| {
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        });
        Ok(reply.unwrap_or_else(|| ScriptedReply::error(404, "no scripted reply")))
    }
}

/// Renders the `path?query` key a request is routed by.
#[must_use]
pub fn route_key(request: &ApiRequest) -> String {
    if request.query().is_empty() {
        return request.path().to_owned();
    }
    let query: Vec<String> = request
        .query()
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    format!("{}?{}", request.path(), query.join("&"))
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, outbound: OutboundRequest) -> TransportResult<ApiResponse> {
        let reply = self.next_reply(&outbound)?;
        let delay = reply.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match reply {
            ScriptedReply::Respond { status, body, .. } => Ok(ApiResponse::new(status, body)),
            ScriptedReply::Fail { message, .. } => {
                Err(TransportError::other(std::io::Error::other(message)))
            }
        }
    }
}
