//! Shared credential and authorization-failure policy for outbound calls.

use crate::gateway::{
    domain::{ApiRequest, ApiResponse, GatewayError, GatewayResult, RequestFailure},
    ports::{HttpTransport, OutboundRequest},
};
use crate::session::{domain::BearerToken, ports::SessionStore, services::SessionContext};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

/// Wraps every outbound call with credential attachment and uniform handling
/// of authorization failures.
///
/// - Request stage: a stored credential is attached as
///   `Authorization: Bearer <token>`; without one the call goes out
///   unauthenticated.
/// - Response stage: 2xx responses pass through. 401 and 403 evict the
///   session and yield [`GatewayError::SessionExpired`]. Every other status
///   and every transport failure yields [`GatewayError::RequestFailed`]
///   without touching the session.
pub struct AuthenticatedGateway<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    transport: Arc<T>,
    session: SessionContext<S>,
}

impl<T, S> Clone for AuthenticatedGateway<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            session: self.session.clone(),
        }
    }
}

impl<T, S> AuthenticatedGateway<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    /// Creates a gateway over a transport and session context.
    #[must_use]
    pub const fn new(transport: Arc<T>, session: SessionContext<S>) -> Self {
        Self { transport, session }
    }

    /// Returns the session context the gateway reads and evicts.
    #[must_use]
    pub const fn session(&self) -> &SessionContext<S> {
        &self.session
    }

    /// Sends a request through the credential policy.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SessionExpired`] after evicting the session on
    /// 401/403, [`GatewayError::RequestFailed`] for any other failure, or
    /// [`GatewayError::Session`] when the credential cannot be read.
    pub async fn send(&self, request: ApiRequest) -> GatewayResult<ApiResponse> {
        let request_id = Uuid::new_v4();
        let token = if request.is_anonymous() {
            None
        } else {
            self.session.token()?
        };
        let fingerprint = token.as_ref().map(BearerToken::fingerprint);
        tracing::debug!(
            %request_id,
            method = %request.method(),
            path = request.path(),
            authenticated = token.is_some(),
            token = fingerprint.as_deref(),
            "sending API request"
        );

        let anonymous = request.is_anonymous();
        let method = request.method();
        let path = request.path().to_owned();
        let outbound = OutboundRequest {
            request_id,
            request,
            authorization: token.as_ref().map(|credential| credential.header_value()),
        };

        let response = match self.transport.send(outbound).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    %request_id,
                    %method,
                    path = %path,
                    error = %err,
                    "API request failed in transport"
                );
                return Err(RequestFailure::transport(err).into());
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        if response.is_authorization_failure() && !anonymous {
            self.evict(request_id, response.status());
            return Err(GatewayError::SessionExpired {
                status: response.status(),
            });
        }

        tracing::warn!(
            %request_id,
            %method,
            path = %path,
            status = response.status(),
            server_message = response.server_message(),
            "API request rejected"
        );
        Err(RequestFailure::status(
            response.status(),
            response.server_message().map(str::to_owned),
        )
        .into())
    }

    /// Sends a request and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`AuthenticatedGateway::send`], or
    /// [`GatewayError::RequestFailed`] when the body does not decode as `D`.
    pub async fn fetch_json<D: DeserializeOwned>(&self, request: ApiRequest) -> GatewayResult<D> {
        let response = self.send(request).await?;
        response
            .decode()
            .map_err(|err| RequestFailure::decode(err).into())
    }

    /// Sends a `GET` for `path` and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// See [`AuthenticatedGateway::fetch_json`].
    pub async fn get_json<D: DeserializeOwned>(&self, path: &str) -> GatewayResult<D> {
        self.fetch_json(ApiRequest::get(path)).await
    }

    fn evict(&self, request_id: Uuid, status: u16) {
        match self.session.evict() {
            Ok(()) => {
                tracing::info!(%request_id, status, "session evicted after authorization failure");
            }
            Err(err) => tracing::warn!(
                %request_id,
                status,
                error = %err,
                "session eviction incomplete after authorization failure"
            ),
        }
    }
}
