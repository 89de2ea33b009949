//! Dashboard batch: tasks and projects are primary, teams auxiliary.

use super::loader::{ScreenBatch, session_lost, settled};
use crate::api::domain::routes;
use crate::fetch::{
    domain::{BatchResults, NamedRequest, ResourceRole},
    services::resolve,
};
use crate::reference::{
    domain::{RawProject, RawTask, RawTeam, ReferenceIndex, User},
    services::ReferenceNormalizer,
};
use crate::screens::domain::{DashboardData, LoadError};

const TASKS: &str = "tasks";
const PROJECTS: &str = "projects";
const TEAMS: &str = "teams";

/// Batch behind the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardBatch;

impl ScreenBatch for DashboardBatch {
    type Data = DashboardData;

    fn requests(&self) -> Vec<NamedRequest> {
        vec![
            NamedRequest::new(TASKS, routes::tasks()),
            NamedRequest::new(PROJECTS, routes::projects()),
            NamedRequest::new(TEAMS, routes::teams()),
        ]
    }

    fn assemble(
        &self,
        mut results: BatchResults,
        viewer: Option<&User>,
    ) -> Result<DashboardData, LoadError> {
        let tasks = resolve(
            TASKS,
            ResourceRole::Primary,
            settled::<Vec<RawTask>>(&mut results, TASKS),
            Vec::new,
        );
        let projects = resolve(
            PROJECTS,
            ResourceRole::Primary,
            settled::<Vec<RawProject>>(&mut results, PROJECTS),
            Vec::new,
        );
        let teams = resolve(
            TEAMS,
            ResourceRole::Auxiliary,
            settled::<Vec<RawTeam>>(&mut results, TEAMS),
            Vec::new,
        );
        if session_lost(&[tasks.error(), projects.error(), teams.error()]) {
            return Err(LoadError::SessionExpired);
        }

        let (raw_tasks, raw_projects) = match (tasks.into_result(), projects.into_result()) {
            (Ok(raw_tasks), Ok(raw_projects)) => (raw_tasks, raw_projects),
            (task_result, project_result) => {
                let mut failures = Vec::new();
                if task_result.is_err() {
                    failures.push("Failed to load tasks.");
                }
                if project_result.is_err() {
                    failures.push("Failed to load projects.");
                }
                return Err(LoadError::Unavailable(failures.join(" ")));
            }
        };

        let user_index = ReferenceIndex::from_users(viewer);
        let all_projects = ReferenceNormalizer::projects(&raw_projects);
        let all_teams = ReferenceNormalizer::new()
            .with_users(user_index.clone())
            .teams(&teams.into_result().unwrap_or_default());
        let normalizer = ReferenceNormalizer::new()
            .with_users(user_index)
            .with_projects(ReferenceIndex::from_projects(&all_projects))
            .with_teams(ReferenceIndex::from_teams(&all_teams));

        Ok(DashboardData {
            tasks: normalizer.tasks(&raw_tasks),
            projects: all_projects,
            teams: all_teams,
            viewer: viewer.cloned(),
        })
    }
}
