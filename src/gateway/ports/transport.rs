//! HTTP transport port used by the gateway.

use crate::gateway::domain::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// A request ready for the wire, with credentials already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    /// Correlation identifier used in log fields.
    pub request_id: Uuid,
    /// Endpoint description.
    pub request: ApiRequest,
    /// `Authorization` header value, when a credential is attached.
    pub authorization: Option<String>,
}

/// Sends one HTTP exchange.
///
/// Implementations return `Ok` for every response the server produced,
/// whatever its status; only failures to obtain a response are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the server's response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response was received.
    async fn send(&self, outbound: OutboundRequest) -> TransportResult<ApiResponse>;
}

/// Errors returned by transport implementations.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(Arc<dyn std::error::Error + Send + Sync>),

    /// The transport could not be configured.
    #[error("invalid transport configuration: {0}")]
    Configuration(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps a connection failure.
    pub fn connect(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Connect(Arc::new(err))
    }

    /// Wraps any other transport failure.
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(err))
    }
}
