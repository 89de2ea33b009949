//! Tests for task filtering and ordering.

use super::{ids, tasks};
use crate::reference::domain::{Task, TaskStatus, User};
use crate::view::{
    domain::{SortKey, TaskFilter},
    services::{derive, filter_options, sort_tasks},
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn board() -> Vec<Task> {
    tasks(json!([
        {
            "_id": "t1", "name": "Write launch notes", "status": "Completed",
            "priority": "Low", "owners": [{"_id": "u1", "name": "Ada"}],
            "tags": ["docs"], "project": {"_id": "p1", "name": "Launch"},
            "dueDate": "2024-01-03"
        },
        {
            "_id": "t2", "name": "Fix login", "status": "To Do",
            "priority": "High", "owners": ["u2"], "tags": ["bug", "auth"],
            "project": {"_id": "p2", "name": "Platform"},
            "dueDate": "2024-01-01"
        },
        {
            "_id": "t3", "name": "Plan sprint", "status": "In Progress",
            "owners": ["u1", {"_id": "u2"}], "tags": [{"_id": "g1", "name": "Planning"}],
            "project": "p1", "description": "Quarterly LAUNCH review",
            "createdAt": "2024-01-02T09:00:00Z"
        },
        {
            "_id": "t4", "name": "Triage inbox", "status": "Blocked",
            "priority": "Medium", "owners": [], "tags": []
        }
    ]))
}

#[rstest]
fn due_date_sort_orders_completed_after_earlier_to_do() {
    let items = tasks(json!([
        {"_id": "a", "name": "a", "status": "Completed", "dueDate": "2024-01-03"},
        {"_id": "b", "name": "b", "status": "To Do", "dueDate": "2024-01-01"}
    ]));

    let ordered = derive(&items, &[], SortKey::DueDate);

    assert_eq!(ids(ordered), ["b", "a"]);
}

#[rstest]
fn priority_sort_puts_unset_last() {
    let items = tasks(json!([
        {"_id": "low", "name": "l", "priority": "Low"},
        {"_id": "high", "name": "h", "priority": "High"},
        {"_id": "none", "name": "n", "priority": null}
    ]));

    let ordered = derive(&items, &[], SortKey::Priority);

    assert_eq!(ids(ordered), ["high", "low", "none"]);
}

#[rstest]
fn status_sort_puts_further_along_first(board: Vec<Task>) {
    let ordered = derive(&board, &[], SortKey::Status);

    assert_eq!(ids(ordered), ["t1", "t3", "t4", "t2"]);
}

#[rstest]
fn due_date_falls_back_to_creation_and_dateless_go_last(board: Vec<Task>) {
    let ordered = derive(&board, &[], SortKey::DueDate);

    assert_eq!(ids(ordered), ["t2", "t3", "t1", "t4"]);
}

#[rstest]
#[case("unknown")]
#[case("")]
#[case("name")]
fn unknown_sort_key_keeps_input_order(board: Vec<Task>, #[case] key: &str) {
    let ordered = derive(&board, &[], SortKey::parse(key));

    assert_eq!(ids(ordered), ["t1", "t2", "t3", "t4"]);
}

#[rstest]
fn equal_keys_keep_input_order() {
    let items = tasks(json!([
        {"_id": "m1", "name": "x", "priority": "Medium"},
        {"_id": "h1", "name": "x", "priority": "High"},
        {"_id": "m2", "name": "x", "priority": "Medium"},
        {"_id": "h2", "name": "x", "priority": "High"}
    ]));

    let ordered = derive(&items, &[], SortKey::Priority);

    assert_eq!(ids(ordered), ["h1", "h2", "m1", "m2"]);
}

#[rstest]
#[case(SortKey::DueDate)]
#[case(SortKey::Priority)]
#[case(SortKey::Status)]
#[case(SortKey::Unsorted)]
fn sorting_is_idempotent(board: Vec<Task>, #[case] key: SortKey) {
    let once = derive(&board, &[], key);
    let mut twice = once.clone();

    sort_tasks(&mut twice, key);

    assert_eq!(ids(once), ids(twice));
}

#[rstest]
#[case(TaskFilter::Status(TaskStatus::Completed), &["t1"])]
#[case(TaskFilter::Owner("u2".to_owned()), &["t2", "t3"])]
#[case(TaskFilter::Tag("bug".to_owned()), &["t2"])]
#[case(TaskFilter::Tag("g1".to_owned()), &["t3"])]
#[case(TaskFilter::Text("LOGIN".to_owned()), &["t2"])]
#[case(TaskFilter::Text("launch".to_owned()), &["t1", "t3"])]
#[case(TaskFilter::Text("planning".to_owned()), &["t3"])]
#[case(TaskFilter::Text("   ".to_owned()), &["t1", "t2", "t3", "t4"])]
fn single_filters_select_matching_tasks(
    board: Vec<Task>,
    #[case] filter: TaskFilter,
    #[case] expected: &[&str],
) {
    let kept = derive(&board, &[filter], SortKey::Unsorted);

    assert_eq!(ids(kept), expected);
}

#[rstest]
#[case(TaskFilter::Owner("u404".to_owned()))]
#[case(TaskFilter::Tag("missing".to_owned()))]
#[case(TaskFilter::Text("zzz".to_owned()))]
fn absent_filter_values_yield_empty_output(board: Vec<Task>, #[case] filter: TaskFilter) {
    assert!(derive(&board, &[filter], SortKey::DueDate).is_empty());
}

#[rstest]
fn empty_input_yields_empty_output() {
    let filters = [TaskFilter::Status(TaskStatus::ToDo)];

    assert!(derive(&[], &filters, SortKey::Priority).is_empty());
}

#[rstest]
fn filters_compose_as_intersection(board: Vec<Task>) {
    let filters = [
        TaskFilter::Owner("u1".to_owned()),
        TaskFilter::Text("launch".to_owned()),
        TaskFilter::Status(TaskStatus::InProgress),
    ];

    let combined = ids(derive(&board, &filters, SortKey::Unsorted));

    let mut previous_len = board.len();
    for count in 1..=filters.len() {
        let prefix = filters.get(..count).unwrap_or_default();
        let kept = derive(&board, prefix, SortKey::Unsorted);
        assert!(kept.len() <= previous_len);
        previous_len = kept.len();
    }
    for filter in &filters {
        let alone = ids(derive(&board, std::slice::from_ref(filter), SortKey::Unsorted));
        assert!(combined.iter().all(|id| alone.contains(id)));
    }
    assert_eq!(combined, ["t3"]);
}

#[rstest]
fn current_user_filter_keeps_owned_tasks(board: Vec<Task>) {
    let me = User::new("u1", "Ada", None);

    let mine = derive(&board, &[TaskFilter::current_user(&me)], SortKey::Unsorted);

    assert_eq!(ids(mine), ["t1", "t3"]);
}

#[rstest]
fn derivation_does_not_copy_records(board: Vec<Task>) {
    let kept = derive(&board, &[], SortKey::Status);

    let first = kept.first().copied();
    assert!(first.is_some_and(|task| board.iter().any(|source| std::ptr::eq(source, task))));
}

#[rstest]
fn filter_options_are_distinct_in_first_seen_order(board: Vec<Task>) {
    let options = filter_options(&board);

    let owner_ids: Vec<&str> = options.owners.iter().map(|owner| owner.id()).collect();
    assert_eq!(owner_ids, ["u1", "u2"]);
    assert_eq!(options.tags, ["docs", "bug", "auth", "g1"]);
}
