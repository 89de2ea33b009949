//! Requests for each remote endpoint.

use super::{
    LoginPayload, MemberPayload, PasswordChangePayload, ProfileUpdate, ProjectPayload,
    SignupPayload, TaskPayload, TeamPayload,
};
use crate::gateway::domain::ApiRequest;
use crate::report::domain::{GroupKind, ReportDateRange};

/// `GET /tasks`.
#[must_use]
pub fn tasks() -> ApiRequest {
    ApiRequest::get("/tasks")
}

/// `GET /projects`.
#[must_use]
pub fn projects() -> ApiRequest {
    ApiRequest::get("/projects")
}

/// `GET /projects/{id}`.
#[must_use]
pub fn project(id: &str) -> ApiRequest {
    ApiRequest::get(format!("/projects/{id}"))
}

/// `GET /teams`.
#[must_use]
pub fn teams() -> ApiRequest {
    ApiRequest::get("/teams")
}

/// `POST /tasks`.
///
/// # Errors
///
/// Returns the serialization error of the payload.
pub fn create_task(payload: &TaskPayload) -> Result<ApiRequest, serde_json::Error> {
    ApiRequest::post("/tasks").with_json(payload)
}

/// `PUT /tasks/{id}`.
///
/// # Errors
///
/// Returns the serialization error of the payload.
pub fn update_task(id: &str, payload: &TaskPayload) -> Result<ApiRequest, serde_json::Error> {
    ApiRequest::put(format!("/tasks/{id}")).with_json(payload)
}

/// `POST /projects`.
///
/// # Errors
///
/// Returns the serialization error of the payload.
pub fn create_project(payload: &ProjectPayload) -> Result<ApiRequest, serde_json::Error> {
    ApiRequest::post("/projects").with_json(payload)
}

/// `POST /teams`.
///
/// # Errors
///
/// Returns the serialization error of the payload.
pub fn create_team(payload: &TeamPayload) -> Result<ApiRequest, serde_json::Error> {
    ApiRequest::post("/teams").with_json(payload)
}

/// `PUT /teams/{id}`.
///
/// # Errors
///
/// Returns the serialization error of the payload.
pub fn update_team(id: &str, payload: &TeamPayload) -> Result<ApiRequest, serde_json::Error> {
    ApiRequest::put(format!("/teams/{id}")).with_json(payload)
}

/// `DELETE /teams/{id}`.
#[must_use]
pub fn delete_team(id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/teams/{id}"))
}

/// `POST /teams/{id}/members`.
///
/// # Errors
///
/// Returns the serialization error of the payload.
pub fn add_member(team_id: &str, payload: &MemberPayload) -> Result<ApiRequest, serde_json::Error> {
    ApiRequest::post(format!("/teams/{team_id}/members")).with_json(payload)
}

/// `DELETE /teams/{id}/members/{userId}`.
#[must_use]
pub fn remove_member(team_id: &str, user_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/teams/{team_id}/members/{user_id}"))
}

/// `GET /report/completed-tasks?startDate&endDate`.
#[must_use]
pub fn completed_tasks(range: &ReportDateRange) -> ApiRequest {
    range
        .query()
        .into_iter()
        .fold(ApiRequest::get("/report/completed-tasks"), |request, (name, value)| {
            request.with_query(name, value)
        })
}

/// `GET /report/pending`.
#[must_use]
pub fn pending_work() -> ApiRequest {
    ApiRequest::get("/report/pending")
}

/// `GET /report/grouped-tasks?groupBy={kind}&status=Completed`.
#[must_use]
pub fn grouped_tasks(kind: GroupKind) -> ApiRequest {
    ApiRequest::get("/report/grouped-tasks")
        .with_query("groupBy", kind.query_value())
        .with_query("status", "Completed")
}

/// Anonymous `POST /auth/login`.
///
/// # Errors
///
/// Returns the serialization error of the payload.
pub fn login(payload: &LoginPayload) -> Result<ApiRequest, serde_json::Error> {
    Ok(ApiRequest::post("/auth/login").with_json(payload)?.anonymous())
}

/// Anonymous `POST /auth/signup`.
///
/// # Errors
///
/// Returns the serialization error of the payload.
pub fn signup(payload: &SignupPayload) -> Result<ApiRequest, serde_json::Error> {
    Ok(ApiRequest::post("/auth/signup").with_json(payload)?.anonymous())
}

/// `PUT /auth/me`.
///
/// # Errors
///
/// Returns the serialization error of the payload.
pub fn update_profile(payload: &ProfileUpdate) -> Result<ApiRequest, serde_json::Error> {
    ApiRequest::put("/auth/me").with_json(payload)
}

/// `PUT /auth/change-password`.
///
/// # Errors
///
/// Returns the serialization error of the payload.
pub fn change_password(payload: &PasswordChangePayload) -> Result<ApiRequest, serde_json::Error> {
    ApiRequest::put("/auth/change-password").with_json(payload)
}

/// `GET /user/data-export`.
#[must_use]
pub fn data_export() -> ApiRequest {
    ApiRequest::get("/user/data-export")
}

/// `DELETE /auth/account`.
#[must_use]
pub fn delete_account() -> ApiRequest {
    ApiRequest::delete("/auth/account")
}
