//! Teams screen data.

use crate::reference::domain::{Team, User};
use crate::view::services::roster_candidates;

/// Teams and the users that can be added to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamsData {
    /// All teams.
    pub teams: Vec<Team>,
    /// Known users: the viewer first, then task owners in first-seen order.
    pub users: Vec<User>,
}

impl TeamsData {
    /// Looks a team up by id.
    #[must_use]
    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id() == id)
    }

    /// Users not yet in team `team_id`. Empty for an unknown team.
    #[must_use]
    pub fn candidates(&self, team_id: &str) -> Vec<&User> {
        self.team(team_id)
            .map(|team| roster_candidates(&self.users, team))
            .unwrap_or_default()
    }
}
