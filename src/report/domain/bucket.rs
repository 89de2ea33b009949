//! Labelled counts fed to charts.

use serde::Serialize;

/// One chart bar: a day label or group name with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportBucket {
    /// Day label (`YYYY-MM-DD`) or group name.
    pub label: String,
    /// Number of tasks in the bucket.
    pub count: u64,
}

impl ReportBucket {
    /// Creates a bucket.
    #[must_use]
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}
