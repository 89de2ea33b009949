//! Tests for the reports batch and stale-result discard.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use super::Harness;
use crate::api::domain::routes;
use crate::gateway::adapters::{ScriptedReply, route_key};
use crate::report::domain::{GroupKind, PendingWork, ReportDateRange};
use crate::screens::services::ReportsBatch;
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::json;
use std::time::Duration;

fn week_ending(day: u32) -> ReportDateRange {
    let end = NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date");
    ReportDateRange::ending_on(end, 7)
}

#[fixture]
fn harness() -> Harness {
    Harness::signed_in()
}

#[rstest]
#[tokio::test]
async fn failed_sub_queries_fall_back_to_zero_defaults(harness: Harness) {
    let range = week_ending(8);
    harness.reply(
        &route_key(&routes::completed_tasks(&range)),
        ScriptedReply::ok(json!([
            {"_id": "t1", "name": "a", "status": "Completed", "updatedAt": "2024-03-04T10:00:00Z"}
        ])),
    );
    harness.reply(
        &route_key(&routes::grouped_tasks(GroupKind::Team)),
        ScriptedReply::ok(json!([{"name": "Core", "count": 1}])),
    );
    harness.reply("/report/pending", ScriptedReply::error(500, "pending down"));
    let loader = harness.loader::<ReportsBatch>();

    let state = loader.load(&ReportsBatch::new(range)).await.expect("applied");

    let snapshot = state.data().expect("reports render");
    assert_eq!(snapshot.pending, PendingWork::default());
    assert_eq!(snapshot.completed_tasks.len(), 1);
    assert_eq!(snapshot.by_team.len(), 1);
    assert!(snapshot.by_owner.is_empty());
    assert!(snapshot.by_project.is_empty());
    assert_eq!(harness.transport.sent().expect("sent").len(), 5);
}

#[rstest]
#[tokio::test]
async fn slower_older_range_never_replaces_newer_one(harness: Harness) {
    let older = week_ending(8);
    let newer = week_ending(15);
    harness.reply(
        &route_key(&routes::completed_tasks(&older)),
        ScriptedReply::ok(json!([{"_id": "old", "name": "old"}])).after(Duration::from_millis(80)),
    );
    harness.reply(
        &route_key(&routes::completed_tasks(&newer)),
        ScriptedReply::ok(json!([{"_id": "new", "name": "new"}])),
    );
    let loader = harness.loader::<ReportsBatch>();
    let older_batch = ReportsBatch::new(older);
    let newer_batch = ReportsBatch::new(newer);

    let (older_state, newer_state) = tokio::join!(loader.load(&older_batch), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        loader.load(&newer_batch).await
    });

    assert!(older_state.is_none());
    assert!(newer_state.is_some());
    let shown = loader.state().expect("state shown");
    let snapshot = shown.data().expect("reports render");
    assert_eq!(snapshot.range, newer);
    assert_eq!(
        snapshot.completed_tasks.first().map(|task| task.id()),
        Some("new")
    );
}

#[rstest]
#[tokio::test]
async fn closed_screen_discards_late_results(harness: Harness) {
    let loader = harness.loader::<ReportsBatch>();
    loader.close();

    let state = loader.load(&ReportsBatch::new(week_ending(8))).await;

    assert!(state.is_none());
    assert!(loader.state().is_none());
}
