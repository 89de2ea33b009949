//! Per-role handling of failed batch members.

use crate::fetch::domain::{ResourceOutcome, ResourceRole};
use crate::gateway::domain::{GatewayError, GatewayResult};

/// Applies `role`'s failure policy to one settled batch member.
///
/// Session expiry is never absorbed, whatever the role. Other failures of a
/// degradable role are replaced by `fallback()` and logged; failures of a
/// primary resource stay fatal.
pub fn resolve<T>(
    name: &str,
    role: ResourceRole,
    result: GatewayResult<T>,
    fallback: impl FnOnce() -> T,
) -> ResourceOutcome<T> {
    match result {
        Ok(value) => ResourceOutcome::Loaded(value),
        Err(err @ GatewayError::SessionExpired { .. }) => ResourceOutcome::Failed(err),
        Err(err) if role.is_degradable() => {
            tracing::warn!(
                resource = name,
                ?role,
                error = %err,
                "resource unavailable, using default"
            );
            ResourceOutcome::Degraded {
                value: fallback(),
                cause: err,
            }
        }
        Err(err) => ResourceOutcome::Failed(err),
    }
}
