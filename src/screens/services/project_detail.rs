//! Project detail batch: the project and all tasks, both primary.

use super::loader::{ScreenBatch, session_lost, settled};
use crate::api::domain::routes;
use crate::fetch::{
    domain::{BatchResults, NamedRequest, ResourceRole},
    services::resolve,
};
use crate::reference::{
    domain::{RawProject, RawTask, ReferenceIndex, User},
    services::ReferenceNormalizer,
};
use crate::screens::domain::{LoadError, ProjectDetail};

const PROJECT: &str = "project";
const TASKS: &str = "tasks";
const FAILURE_MESSAGE: &str = "Failed to load project data";

/// Batch behind the project detail screen for one project id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailBatch {
    project_id: String,
}

impl ProjectDetailBatch {
    /// Creates the batch for the project at `project_id`.
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }

    /// Returns the routed project id.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

impl ScreenBatch for ProjectDetailBatch {
    type Data = ProjectDetail;

    fn requests(&self) -> Vec<NamedRequest> {
        vec![
            NamedRequest::new(PROJECT, routes::project(&self.project_id)),
            NamedRequest::new(TASKS, routes::tasks()),
        ]
    }

    fn assemble(
        &self,
        mut results: BatchResults,
        viewer: Option<&User>,
    ) -> Result<ProjectDetail, LoadError> {
        let project = resolve(
            PROJECT,
            ResourceRole::Primary,
            settled::<RawProject>(&mut results, PROJECT),
            RawProject::default,
        );
        let tasks = resolve(
            TASKS,
            ResourceRole::Primary,
            settled::<Vec<RawTask>>(&mut results, TASKS),
            Vec::new,
        );
        if session_lost(&[project.error(), tasks.error()]) {
            return Err(LoadError::SessionExpired);
        }
        let (Ok(raw_project), Ok(raw_tasks)) = (project.into_result(), tasks.into_result()) else {
            return Err(LoadError::Unavailable(FAILURE_MESSAGE.to_owned()));
        };

        let loaded = ReferenceNormalizer::project(&raw_project);
        let normalizer = ReferenceNormalizer::new()
            .with_users(ReferenceIndex::from_users(viewer))
            .with_projects(ReferenceIndex::from_projects([&loaded]));
        let project_tasks = normalizer
            .tasks(&raw_tasks)
            .into_iter()
            .filter(|task| task.project().id() == self.project_id)
            .collect();

        Ok(ProjectDetail {
            project: loaded,
            tasks: project_tasks,
        })
    }
}
