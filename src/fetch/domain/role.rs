//! Resource roles deciding how a failed fetch is handled.

/// How a screen depends on one member of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceRole {
    /// The screen's primary list: a failure surfaces as a retryable error.
    Primary,
    /// Display-only auxiliary data: a failure degrades to an empty value.
    Auxiliary,
    /// One input of a multi-chart report: a failure degrades to the
    /// sub-query's documented zero value.
    ReportSubQuery,
}

impl ResourceRole {
    /// Returns `true` when a failure of this resource may be replaced by a
    /// default value.
    #[must_use]
    pub const fn is_degradable(self) -> bool {
        matches!(self, Self::Auxiliary | Self::ReportSubQuery)
    }
}
