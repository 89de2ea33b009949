//! Date window for the completed-tasks report.

use chrono::{Days, NaiveDate};
use mockable::Clock;
use serde::Serialize;
use thiserror::Error;

/// Rejected report date ranges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportRangeError {
    /// The start date falls after the end date.
    #[error("report range starts on {start} after it ends on {end}")]
    Inverted {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day.
        end: NaiveDate,
    },
}

/// Inclusive range of calendar days sent as `startDate`/`endDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportDateRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns [`ReportRangeError::Inverted`] when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportRangeError> {
        if start > end {
            return Err(ReportRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// The range from `days` days before `end` up to `end`.
    #[must_use]
    pub fn ending_on(end: NaiveDate, days: u32) -> Self {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// The `days` days ending on the clock's current UTC date.
    #[must_use]
    pub fn trailing(days: u32, clock: &impl Clock) -> Self {
        Self::ending_on(clock.utc().date_naive(), days)
    }

    /// First day.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Query parameters in request order.
    #[must_use]
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("startDate", self.start.format("%Y-%m-%d").to_string()),
            ("endDate", self.end.format("%Y-%m-%d").to_string()),
        ]
    }
}
