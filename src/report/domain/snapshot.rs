//! Everything the reports screen shows, as one exportable value.

use super::{GroupKind, GroupedCount, PendingWork, ReportBucket, ReportDateRange};
use crate::reference::domain::Task;
use crate::report::services::{aggregate_by_day, grouped_chart};
use chrono::{NaiveDate, TimeZone};
use serde::Serialize;

/// Headline figures above the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Completed tasks in the date range.
    pub total_completed: usize,
    /// Tasks still pending.
    pub pending_tasks: u64,
    /// Teams with completed work.
    pub active_teams: usize,
    /// Owners with completed work.
    pub active_users: usize,
}

/// Loaded report inputs. Sub-queries that failed hold their zero defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    /// Date range of the completed-tasks query.
    pub range: ReportDateRange,
    /// Tasks completed in the range.
    pub completed_tasks: Vec<Task>,
    /// Pending-work totals.
    pub pending: PendingWork,
    /// Completions grouped by team.
    pub by_team: Vec<GroupedCount>,
    /// Completions grouped by owner.
    pub by_owner: Vec<GroupedCount>,
    /// Completions grouped by project.
    pub by_project: Vec<GroupedCount>,
}

impl ReportSnapshot {
    /// A snapshot with every sub-query at its zero default.
    #[must_use]
    pub const fn empty(range: ReportDateRange) -> Self {
        Self {
            range,
            completed_tasks: Vec::new(),
            pending: PendingWork {
                total_days_pending: 0.0,
                pending_tasks_count: 0,
            },
            by_team: Vec::new(),
            by_owner: Vec::new(),
            by_project: Vec::new(),
        }
    }

    /// Completions per day in `zone`, ascending by day.
    #[must_use]
    pub fn completed_by_day<Tz: TimeZone>(&self, zone: &Tz) -> Vec<ReportBucket> {
        aggregate_by_day(&self.completed_tasks, zone)
    }

    /// Chart buckets for one grouping, optionally windowed to `limit` rows.
    #[must_use]
    pub fn chart(&self, kind: GroupKind, limit: Option<usize>) -> Vec<ReportBucket> {
        grouped_chart(kind, self.grouped(kind), limit)
    }

    /// Rows of one grouping as received.
    #[must_use]
    pub fn grouped(&self, kind: GroupKind) -> &[GroupedCount] {
        match kind {
            GroupKind::Team => &self.by_team,
            GroupKind::Owner => &self.by_owner,
            GroupKind::Project => &self.by_project,
        }
    }

    /// Headline figures.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total_completed: self.completed_tasks.len(),
            pending_tasks: self.pending.pending_tasks_count,
            active_teams: self.by_team.len(),
            active_users: self.by_owner.len(),
        }
    }

    /// Pretty-printed JSON export.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the snapshot cannot be encoded.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// File name for an export made on `day`.
    #[must_use]
    pub fn export_file_name(day: NaiveDate) -> String {
        format!("workasana-reports-{}.json", day.format("%Y-%m-%d"))
    }
}
