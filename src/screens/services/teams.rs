//! Teams batch: teams are primary; tasks only feed the user roster.

use super::loader::{ScreenBatch, session_lost, settled};
use crate::api::domain::routes;
use crate::fetch::{
    domain::{BatchResults, NamedRequest, ResourceRole},
    services::resolve,
};
use crate::reference::{
    domain::{RawTask, RawTeam, ReferenceIndex, User},
    services::ReferenceNormalizer,
};
use crate::screens::domain::{LoadError, TeamsData};

const TEAMS: &str = "teams";
const TASKS: &str = "tasks";
const FAILURE_MESSAGE: &str = "Failed to load teams. Please try again.";

/// Batch behind the teams screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamsBatch;

impl ScreenBatch for TeamsBatch {
    type Data = TeamsData;

    fn requests(&self) -> Vec<NamedRequest> {
        vec![
            NamedRequest::new(TEAMS, routes::teams()),
            NamedRequest::new(TASKS, routes::tasks()),
        ]
    }

    fn assemble(
        &self,
        mut results: BatchResults,
        viewer: Option<&User>,
    ) -> Result<TeamsData, LoadError> {
        let teams = resolve(
            TEAMS,
            ResourceRole::Primary,
            settled::<Vec<RawTeam>>(&mut results, TEAMS),
            Vec::new,
        );
        let tasks = resolve(
            TASKS,
            ResourceRole::Auxiliary,
            settled::<Vec<RawTask>>(&mut results, TASKS),
            Vec::new,
        );
        if session_lost(&[teams.error(), tasks.error()]) {
            return Err(LoadError::SessionExpired);
        }
        let Ok(raw_teams) = teams.into_result() else {
            return Err(LoadError::Unavailable(FAILURE_MESSAGE.to_owned()));
        };

        let normalizer = ReferenceNormalizer::new().with_users(ReferenceIndex::from_users(viewer));
        let mut users: Vec<User> = viewer.into_iter().cloned().collect();
        for task in normalizer.tasks(&tasks.into_result().unwrap_or_default()) {
            for owner in task.owners() {
                if owner.is_resolved() && !users.iter().any(|user| user.id() == owner.id()) {
                    users.push(User::from_reference(owner));
                }
            }
        }

        Ok(TeamsData {
            teams: normalizer.teams(&raw_teams),
            users,
        })
    }
}
