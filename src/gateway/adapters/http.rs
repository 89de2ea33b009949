//! `reqwest`-backed HTTP transport.

use crate::config::ClientConfig;
use crate::gateway::{
    domain::{ApiResponse, HttpMethod},
    ports::{HttpTransport, OutboundRequest, TransportError, TransportResult},
};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

/// HTTP transport sending requests to the configured API base URL.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Builds a transport from client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Configuration`] when the HTTP client cannot
    /// be built.
    pub fn new(config: &ClientConfig) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| TransportError::Configuration(err.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url().to_owned(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn method_for(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::connect(err)
    } else {
        TransportError::other(err)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, outbound: OutboundRequest) -> TransportResult<ApiResponse> {
        let request = &outbound.request;
        let mut builder = self
            .client
            .request(method_for(request.method()), self.url_for(request.path()));
        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        if let Some(authorization) = &outbound.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_send_error)?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        Ok(ApiResponse::new(status, body))
    }
}
