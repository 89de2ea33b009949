//! Unit tests for view derivation.

mod derive_tests;

use crate::reference::{
    domain::{Project, RawProject, RawTask, RawTeam, Task, Team},
    services::ReferenceNormalizer,
};
use serde_json::Value;

#[expect(clippy::expect_used, reason = "Test helpers use expect for clarity")]
pub(super) fn tasks(value: Value) -> Vec<Task> {
    let raw: Vec<RawTask> = serde_json::from_value(value).expect("task payload");
    ReferenceNormalizer::new().tasks(&raw)
}

#[expect(clippy::expect_used, reason = "Test helpers use expect for clarity")]
pub(super) fn projects(value: Value) -> Vec<Project> {
    let raw: Vec<RawProject> = serde_json::from_value(value).expect("project payload");
    ReferenceNormalizer::projects(&raw)
}

#[expect(clippy::expect_used, reason = "Test helpers use expect for clarity")]
pub(super) fn team(value: Value) -> Team {
    let raw: RawTeam = serde_json::from_value(value).expect("team payload");
    ReferenceNormalizer::new().team(&raw)
}

pub(super) fn ids<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a str> {
    tasks.into_iter().map(Task::id).collect()
}
