//! Pending-work totals and the completion estimate.

use serde::{Deserialize, Serialize};

/// Share of pending days shown as the estimated completion figure.
///
/// Unconfirmed by product; callers that know better pass their own factor to
/// [`PendingWork::estimated_completion_with`].
pub const PENDING_ESTIMATE_FACTOR: f64 = 0.6;

/// Server totals for unfinished work. Defaults to zero when unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PendingWork {
    /// Sum of days the pending tasks are expected to take.
    pub total_days_pending: f64,
    /// Number of pending tasks.
    pub pending_tasks_count: u64,
}

impl PendingWork {
    /// Estimated completion using [`PENDING_ESTIMATE_FACTOR`].
    #[must_use]
    pub fn estimated_completion(&self) -> f64 {
        self.estimated_completion_with(PENDING_ESTIMATE_FACTOR)
    }

    /// Estimated completion: `max(0, total_days_pending * factor)`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "The estimate is a scaled day total"
    )]
    pub fn estimated_completion_with(&self, factor: f64) -> f64 {
        (self.total_days_pending * factor).max(0.0)
    }
}
