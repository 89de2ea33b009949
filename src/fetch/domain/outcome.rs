//! Per-resource outcome after applying the degrade policy.

use crate::gateway::domain::GatewayError;

/// Result of one batch member after its role's policy was applied.
#[derive(Debug, Clone)]
pub enum ResourceOutcome<T> {
    /// The fetch succeeded.
    Loaded(T),
    /// The fetch failed and a default value stands in for it.
    Degraded {
        /// Substituted default.
        value: T,
        /// The failure that was replaced.
        cause: GatewayError,
    },
    /// The fetch failed and no substitute is allowed.
    Failed(GatewayError),
}

impl<T> ResourceOutcome<T> {
    /// Returns the loaded or substituted value.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) | Self::Degraded { value, .. } => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Converts into the loaded or substituted value, or the fatal error.
    ///
    /// # Errors
    ///
    /// Returns the gateway error of a [`ResourceOutcome::Failed`] outcome.
    pub fn into_result(self) -> Result<T, GatewayError> {
        match self {
            Self::Loaded(value) | Self::Degraded { value, .. } => Ok(value),
            Self::Failed(err) => Err(err),
        }
    }

    /// Returns the fatal error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&GatewayError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Loaded(_) | Self::Degraded { .. } => None,
        }
    }

    /// Returns `true` when a default stands in for a failed fetch.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Returns `true` when the fetch failed fatally.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Maps the carried value, keeping the outcome kind.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResourceOutcome<U> {
        match self {
            Self::Loaded(value) => ResourceOutcome::Loaded(f(value)),
            Self::Degraded { value, cause } => ResourceOutcome::Degraded {
                value: f(value),
                cause,
            },
            Self::Failed(err) => ResourceOutcome::Failed(err),
        }
    }
}
