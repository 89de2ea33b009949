//! Typed calls for every Workasana endpoint.

use crate::api::domain::{
    MemberPayload, ProjectDraft, TaskDraft, TeamDraft, ValidationError, routes,
};
use crate::gateway::{
    domain::{ApiRequest, GatewayError, GatewayResult},
    ports::HttpTransport,
    services::AuthenticatedGateway,
};
use crate::reference::domain::{RawProject, RawTask, RawTeam};
use crate::report::domain::{GroupKind, GroupedCount, PendingWork, ReportDateRange};
use crate::session::ports::SessionStore;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for mutations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from a mutation call.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The draft was rejected locally; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// The payload could not be encoded.
    #[error("payload encoding failed: {0}")]
    Encoding(Arc<serde_json::Error>),
}

impl ApiError {
    /// Returns the message to show next to the form, preferring the
    /// validation text, then the server's message, then `fallback`.
    #[must_use]
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            Self::Validation(err) => err.to_string().into(),
            Self::Gateway(GatewayError::RequestFailed(failure)) => {
                failure.message_or(fallback).into()
            }
            Self::Gateway(err) if err.is_session_expired() => err.user_message().into(),
            Self::Gateway(_) | Self::Encoding(_) => fallback.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(Arc::new(err))
    }
}

/// Workasana endpoints over an [`AuthenticatedGateway`].
pub struct WorkasanaApi<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    gateway: AuthenticatedGateway<T, S>,
}

impl<T, S> Clone for WorkasanaApi<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl<T, S> WorkasanaApi<T, S>
where
    T: HttpTransport,
    S: SessionStore,
{
    /// Creates a client over `gateway`.
    #[must_use]
    pub const fn new(gateway: AuthenticatedGateway<T, S>) -> Self {
        Self { gateway }
    }

    /// Returns the underlying gateway.
    #[must_use]
    pub const fn gateway(&self) -> &AuthenticatedGateway<T, S> {
        &self.gateway
    }

    /// Lists every task.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn tasks(&self) -> GatewayResult<Vec<RawTask>> {
        self.gateway.fetch_json(routes::tasks()).await
    }

    /// Lists every project.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn projects(&self) -> GatewayResult<Vec<RawProject>> {
        self.gateway.fetch_json(routes::projects()).await
    }

    /// Fetches one project.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn project(&self, id: &str) -> GatewayResult<RawProject> {
        self.gateway.fetch_json(routes::project(id)).await
    }

    /// Lists every team.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn teams(&self) -> GatewayResult<Vec<RawTeam>> {
        self.gateway.fetch_json(routes::teams()).await
    }

    /// Fetches tasks completed within `range`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn completed_tasks(&self, range: &ReportDateRange) -> GatewayResult<Vec<RawTask>> {
        self.gateway.fetch_json(routes::completed_tasks(range)).await
    }

    /// Fetches pending-work totals.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn pending_work(&self) -> GatewayResult<PendingWork> {
        self.gateway.fetch_json(routes::pending_work()).await
    }

    /// Fetches completion counts grouped by `kind`, in server order.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn grouped_tasks(&self, kind: GroupKind) -> GatewayResult<Vec<GroupedCount>> {
        self.gateway.fetch_json(routes::grouped_tasks(kind)).await
    }

    /// Downloads everything the server holds for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn export_data(&self) -> GatewayResult<Value> {
        self.gateway.fetch_json(routes::data_export()).await
    }

    /// Creates a task from `draft`, or updates task `existing` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without calling out when the draft is
    /// incomplete, or the gateway error of the call.
    pub async fn save_task(&self, draft: &TaskDraft, existing: Option<&str>) -> ApiResult<Value> {
        let payload = draft.validate()?;
        let request = match existing {
            Some(id) => routes::update_task(id, &payload)?,
            None => routes::create_task(&payload)?,
        };
        self.mutate(request).await
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// See [`WorkasanaApi::save_task`].
    pub async fn create_project(&self, draft: &ProjectDraft) -> ApiResult<Value> {
        let payload = draft.validate()?;
        self.mutate(routes::create_project(&payload)?).await
    }

    /// Creates a team, or updates team `existing` when given.
    ///
    /// # Errors
    ///
    /// See [`WorkasanaApi::save_task`].
    pub async fn save_team(&self, draft: &TeamDraft, existing: Option<&str>) -> ApiResult<Value> {
        let payload = draft.validate()?;
        let request = match existing {
            Some(id) => routes::update_team(id, &payload)?,
            None => routes::create_team(&payload)?,
        };
        self.mutate(request).await
    }

    /// Deletes a team.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn delete_team(&self, id: &str) -> ApiResult<Value> {
        self.mutate(routes::delete_team(id)).await
    }

    /// Adds `user_id` to a team.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank user id, or the gateway
    /// error.
    pub async fn add_member(&self, team_id: &str, user_id: &str) -> ApiResult<Value> {
        let payload = MemberPayload::for_user(user_id)?;
        self.mutate(routes::add_member(team_id, &payload)?).await
    }

    /// Removes `user_id` from a team.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn remove_member(&self, team_id: &str, user_id: &str) -> ApiResult<Value> {
        self.mutate(routes::remove_member(team_id, user_id)).await
    }

    async fn mutate(&self, request: ApiRequest) -> ApiResult<Value> {
        let response = self.gateway.send(request).await?;
        Ok(response.body().clone())
    }
}
