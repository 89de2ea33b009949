//! Reports batch: five sub-queries, each degrading to its zero default.

use super::loader::{ScreenBatch, session_lost, settled};
use crate::api::domain::routes;
use crate::fetch::{
    domain::{BatchResults, NamedRequest, ResourceRole},
    services::resolve,
};
use crate::reference::{
    domain::{RawTask, User},
    services::ReferenceNormalizer,
};
use crate::report::domain::{
    GroupKind, GroupedCount, PendingWork, ReportDateRange, ReportSnapshot,
};
use crate::screens::domain::LoadError;

const COMPLETED: &str = "completed";
const PENDING: &str = "pending";

const fn grouped_name(kind: GroupKind) -> &'static str {
    match kind {
        GroupKind::Team => "byTeam",
        GroupKind::Owner => "byOwner",
        GroupKind::Project => "byProject",
    }
}

/// Batch behind the reports screen for one date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportsBatch {
    range: ReportDateRange,
}

impl ReportsBatch {
    /// Creates the batch for `range`.
    #[must_use]
    pub const fn new(range: ReportDateRange) -> Self {
        Self { range }
    }

    /// Returns the date range.
    #[must_use]
    pub const fn range(&self) -> ReportDateRange {
        self.range
    }
}

impl ScreenBatch for ReportsBatch {
    type Data = ReportSnapshot;

    fn requests(&self) -> Vec<NamedRequest> {
        let mut requests = vec![
            NamedRequest::new(COMPLETED, routes::completed_tasks(&self.range)),
            NamedRequest::new(PENDING, routes::pending_work()),
        ];
        requests.extend(
            GroupKind::ALL
                .into_iter()
                .map(|kind| NamedRequest::new(grouped_name(kind), routes::grouped_tasks(kind))),
        );
        requests
    }

    fn assemble(
        &self,
        mut results: BatchResults,
        _viewer: Option<&User>,
    ) -> Result<ReportSnapshot, LoadError> {
        let role = ResourceRole::ReportSubQuery;
        let completed = resolve(
            COMPLETED,
            role,
            settled::<Vec<RawTask>>(&mut results, COMPLETED),
            Vec::new,
        );
        let pending = resolve(
            PENDING,
            role,
            settled::<PendingWork>(&mut results, PENDING),
            PendingWork::default,
        );
        let [by_team, by_owner, by_project] = GroupKind::ALL.map(|kind| {
            let name = grouped_name(kind);
            resolve(name, role, settled::<Vec<GroupedCount>>(&mut results, name), Vec::new)
        });
        if session_lost(&[
            completed.error(),
            pending.error(),
            by_team.error(),
            by_owner.error(),
            by_project.error(),
        ]) {
            return Err(LoadError::SessionExpired);
        }

        Ok(ReportSnapshot {
            range: self.range,
            completed_tasks: ReferenceNormalizer::new()
                .tasks(&completed.into_result().unwrap_or_default()),
            pending: pending.into_result().unwrap_or_default(),
            by_team: by_team.into_result().unwrap_or_default(),
            by_owner: by_owner.into_result().unwrap_or_default(),
            by_project: by_project.into_result().unwrap_or_default(),
        })
    }
}
