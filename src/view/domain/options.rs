//! Values offered by owner and tag filter controls.

use crate::reference::domain::CanonicalRef;

/// Distinct owners and tag values found in a task set, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Owners that carry an id.
    pub owners: Vec<CanonicalRef>,
    /// Tag values.
    pub tags: Vec<String>,
}
