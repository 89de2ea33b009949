//! Screen loads driven through the public API.

use crate::scripted_flow::helpers::{Client, client};
use chrono::{NaiveDate, Utc};
use rstest::rstest;
use serde_json::json;
use workasana::{
    api::{
        domain::{LoginForm, routes},
        services::ApiError,
    },
    gateway::{
        adapters::{ScriptedReply, route_key},
        domain::HttpMethod,
    },
    report::domain::{GroupKind, ReportBucket, ReportDateRange, ReportSnapshot, ReportSummary},
    screens::{
        domain::LoadError,
        services::{DashboardBatch, ProjectDetailBatch, ReportsBatch},
    },
};

async fn signed_in(client: &Client) -> eyre::Result<()> {
    client.accept_login("u1", "Ada")?;
    client
        .auth()
        .login(&LoginForm {
            email: "ada@example.com".to_owned(),
            password: "secret1".to_owned(),
        })
        .await?;
    Ok(())
}

#[rstest]
#[tokio::test]
async fn expiry_on_one_screen_signs_the_user_out(client: Client) -> eyre::Result<()> {
    signed_in(&client).await?;
    client.reply(
        HttpMethod::Get,
        "/tasks",
        ScriptedReply::ok(json!([{"_id": "t1", "name": "Write docs", "owners": ["u1"], "project": "p1"}])),
    )?;
    client.reply(
        HttpMethod::Get,
        "/projects",
        ScriptedReply::ok(json!([{"_id": "p1", "name": "Launch"}])),
    )?;
    client.reply(HttpMethod::Get, "/teams", ScriptedReply::ok(json!([])))?;
    client.reply(
        HttpMethod::Get,
        "/projects/p1",
        ScriptedReply::error(403, "jwt expired"),
    )?;

    let dashboard = client
        .loader::<DashboardBatch>()
        .load(&DashboardBatch)
        .await
        .ok_or_else(|| eyre::eyre!("dashboard state discarded"))?;
    let mine = dashboard
        .data()
        .map(|data| data.my_tasks(&[]).len())
        .ok_or_else(|| eyre::eyre!("dashboard failed"))?;
    assert_eq!(mine, 1);

    let detail = client
        .loader::<ProjectDetailBatch>()
        .load(&ProjectDetailBatch::new("p1"))
        .await
        .ok_or_else(|| eyre::eyre!("detail state discarded"))?;

    assert_eq!(detail.error(), Some(&LoadError::SessionExpired));
    assert!(!client.session.is_authenticated()?);
    let after = client.api().tasks().await;
    assert!(after.is_ok());
    let sent = client.transport.sent()?;
    let last = sent
        .last()
        .ok_or_else(|| eyre::eyre!("no requests recorded"))?;
    assert!(last.authorization.is_none());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn reports_render_and_export(client: Client) -> eyre::Result<()> {
    signed_in(&client).await?;
    let end = NaiveDate::from_ymd_opt(2024, 3, 8).ok_or_else(|| eyre::eyre!("bad date"))?;
    let range = ReportDateRange::ending_on(end, 7);
    client.reply(
        HttpMethod::Get,
        &route_key(&routes::completed_tasks(&range)),
        ScriptedReply::ok(json!([
            {"_id": "t1", "name": "a", "status": "Completed", "updatedAt": "2024-03-04T09:00:00Z"},
            {"_id": "t2", "name": "b", "status": "Completed", "updatedAt": "2024-03-04T17:00:00Z"},
            {"_id": "t3", "name": "c", "status": "Completed", "updatedAt": "2024-03-06T12:00:00Z"}
        ])),
    )?;
    client.reply(
        HttpMethod::Get,
        &route_key(&routes::pending_work()),
        ScriptedReply::ok(json!({"totalDaysPending": 10, "pendingTasksCount": 4})),
    )?;
    client.reply(
        HttpMethod::Get,
        &route_key(&routes::grouped_tasks(GroupKind::Owner)),
        ScriptedReply::ok(json!([{"name": "Ada", "count": 2}, {"count": 1}])),
    )?;

    let state = client
        .loader::<ReportsBatch>()
        .load(&ReportsBatch::new(range))
        .await
        .ok_or_else(|| eyre::eyre!("report state discarded"))?;
    let snapshot = state
        .data()
        .ok_or_else(|| eyre::eyre!("reports failed"))?;

    assert_eq!(
        snapshot.completed_by_day(&Utc),
        [
            ReportBucket::new("2024-03-04", 2),
            ReportBucket::new("2024-03-06", 1),
        ]
    );
    assert_eq!(
        snapshot.chart(GroupKind::Owner, Some(5)),
        [
            ReportBucket::new("Ada", 2),
            ReportBucket::new("Unknown Owner", 1),
        ]
    );
    assert_eq!(
        snapshot.summary(),
        ReportSummary {
            total_completed: 3,
            pending_tasks: 4,
            active_teams: 0,
            active_users: 2,
        }
    );
    let exported = snapshot.to_pretty_json()?;
    let reparsed: serde_json::Value = serde_json::from_str(&exported)?;
    assert_eq!(reparsed["range"]["start"], "2024-03-01");
    assert_eq!(
        ReportSnapshot::export_file_name(end),
        "workasana-reports-2024-03-08.json"
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn mutation_after_expiry_reports_session_expired(client: Client) -> eyre::Result<()> {
    signed_in(&client).await?;
    client.reply(
        HttpMethod::Delete,
        "/teams/team1",
        ScriptedReply::error(401, "jwt expired"),
    )?;

    let result = client.api().delete_team("team1").await;

    let err = result
        .err()
        .ok_or_else(|| eyre::eyre!("delete should fail"))?;
    assert!(matches!(&err, ApiError::Gateway(gateway) if gateway.is_session_expired()));
    assert!(client.session.current_user()?.is_none());
    Ok(())
}
