//! Group-stage group.

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// A group of teams; the admin certifies which of them advance.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub teams: Vec<Team>,
    /// Absent or empty until the group stage is resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advancing_teams: Option<Vec<TeamId>>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            teams: Vec::new(),
            advancing_teams: None,
        }
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    pub fn has_team(&self, team_id: TeamId) -> bool {
        self.teams.iter().any(|t| t.id == team_id)
    }

    /// Advancing teams, or `None` while the group is unresolved (absent or empty).
    pub fn resolved_advancing(&self) -> Option<&[TeamId]> {
        self.advancing_teams
            .as_deref()
            .filter(|teams| !teams.is_empty())
    }
}
