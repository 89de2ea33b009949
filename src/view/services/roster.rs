//! Team roster helpers.

use crate::reference::domain::{Team, User};

/// Users that can still be added to `team`, in input order.
#[must_use]
pub fn roster_candidates<'a>(users: &'a [User], team: &Team) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| !team.has_member(user.id()))
        .collect()
}
