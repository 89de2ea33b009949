//! Tests for typed endpoint calls over the scripted transport.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::api::{
    domain::{TaskDraft, TeamDraft, ValidationError, routes},
    services::{ApiError, WorkasanaApi},
};
use crate::gateway::{
    adapters::{ScriptedReply, ScriptedTransport, route_key},
    domain::{GatewayError, HttpMethod},
    services::AuthenticatedGateway,
};
use crate::report::domain::{GroupKind, ReportDateRange};
use crate::session::{adapters::memory::InMemorySessionStore, services::SessionContext};
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::json;
use std::sync::Arc;

#[fixture]
fn transport() -> ScriptedTransport {
    ScriptedTransport::new()
}

fn api_over(transport: &ScriptedTransport) -> WorkasanaApi<ScriptedTransport, InMemorySessionStore> {
    let session = SessionContext::new(Arc::new(InMemorySessionStore::new()));
    WorkasanaApi::new(AuthenticatedGateway::new(Arc::new(transport.clone()), session))
}

fn draft() -> TaskDraft {
    TaskDraft {
        name: "Write docs".to_owned(),
        team: "team1".to_owned(),
        project: "p1".to_owned(),
        owners: vec!["u1".to_owned()],
        ..TaskDraft::default()
    }
}

#[rstest]
fn report_routes_carry_their_query_parameters() {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2024, 3, 8).expect("valid date");
    let range = ReportDateRange::new(start, end).expect("ordered range");

    assert_eq!(
        route_key(&routes::completed_tasks(&range)),
        "/report/completed-tasks?startDate=2024-03-01&endDate=2024-03-08"
    );
    assert_eq!(
        route_key(&routes::grouped_tasks(GroupKind::Owner)),
        "/report/grouped-tasks?groupBy=owners&status=Completed"
    );
    assert_eq!(routes::remove_member("team1", "u2").path(), "/teams/team1/members/u2");
}

#[rstest]
#[tokio::test]
async fn new_task_is_posted_with_defaults(transport: ScriptedTransport) {
    transport
        .script(HttpMethod::Post, "/tasks", ScriptedReply::status(201, json!({"_id": "t9"})))
        .expect("script");

    let created = api_over(&transport)
        .save_task(&draft(), None)
        .await
        .expect("task created");

    assert_eq!(created, json!({"_id": "t9"}));
    let sent = transport.sent().expect("sent");
    let body = sent.first().and_then(|outbound| outbound.request.body()).cloned();
    assert_eq!(
        body,
        Some(json!({
            "name": "Write docs",
            "team": "team1",
            "project": "p1",
            "owners": ["u1"],
            "tags": [],
            "timeToComplete": 1,
            "status": "To Do"
        }))
    );
}

#[rstest]
#[tokio::test]
async fn existing_task_is_updated_in_place(transport: ScriptedTransport) {
    transport
        .script(HttpMethod::Put, "/tasks/t1", ScriptedReply::ok(json!({})))
        .expect("script");

    api_over(&transport)
        .save_task(&draft(), Some("t1"))
        .await
        .expect("task updated");

    let sent = transport.sent().expect("sent");
    assert_eq!(sent.len(), 1);
    assert!(sent.iter().all(|outbound| outbound.request.method() == HttpMethod::Put));
}

#[rstest]
#[tokio::test]
async fn invalid_drafts_never_reach_the_network(transport: ScriptedTransport) {
    let api = api_over(&transport);

    let task = api.save_task(&TaskDraft::default(), None).await;
    let team = api.save_team(&TeamDraft::default(), None).await;
    let member = api.add_member("team1", "  ").await;

    assert!(matches!(task, Err(ApiError::Validation(ValidationError::MissingTaskName))));
    assert!(matches!(team, Err(ApiError::Validation(ValidationError::MissingTeamName))));
    assert!(matches!(member, Err(ApiError::Validation(ValidationError::MissingMember))));
    assert!(transport.sent().expect("sent").is_empty());
}

#[rstest]
#[tokio::test]
async fn server_message_is_shown_for_rejected_mutations(transport: ScriptedTransport) {
    transport
        .script(
            HttpMethod::Post,
            "/teams/team1/members",
            ScriptedReply::error(409, "User already in team"),
        )
        .expect("script");
    transport
        .script(HttpMethod::Delete, "/teams/team1", ScriptedReply::status(500, json!({})))
        .expect("script");
    let api = api_over(&transport);

    let added = api.add_member("team1", "u2").await.expect_err("conflict");
    let deleted = api.delete_team("team1").await.expect_err("server error");

    assert_eq!(added.user_message("Failed to add member."), "User already in team");
    assert_eq!(deleted.user_message("Failed to delete team."), "Failed to delete team.");
    assert!(matches!(deleted, ApiError::Gateway(GatewayError::RequestFailed(_))));
    let sent = transport.sent().expect("sent");
    let member_body = sent.first().and_then(|outbound| outbound.request.body()).cloned();
    assert_eq!(member_body, Some(json!({"userId": "u2"})));
}

#[rstest]
#[tokio::test]
async fn lists_decode_into_raw_records(transport: ScriptedTransport) {
    transport
        .script(
            HttpMethod::Get,
            "/teams",
            ScriptedReply::ok(json!([{"_id": "team1", "name": "Core", "members": ["u1"]}])),
        )
        .expect("script");
    transport
        .script(HttpMethod::Get, "/report/pending", ScriptedReply::ok(json!({"pendingTasksCount": 3})))
        .expect("script");
    let api = api_over(&transport);

    let teams = api.teams().await.expect("teams");
    let pending = api.pending_work().await.expect("pending");
    let missing = api.project("p404").await;

    assert_eq!(teams.len(), 1);
    assert_eq!(pending.pending_tasks_count, 3);
    assert!(matches!(
        missing,
        Err(GatewayError::RequestFailed(ref failure)) if failure.http_status() == Some(404)
    ));
}
