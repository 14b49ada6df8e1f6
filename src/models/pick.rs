//! A user's predictions: match winners and group qualifiers.

use crate::models::game::MatchId;
use crate::models::group::GroupId;
use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Predicted winner for one match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPick {
    pub match_id: MatchId,
    pub team_id: TeamId,
}

/// Predicted qualifiers (at most 2, oldest first) for one group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPick {
    pub group_id: GroupId,
    pub selected_teams: Vec<TeamId>,
}

/// Everything one user has predicted in one tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPicks {
    pub username: String,
    pub match_picks: Vec<UserPick>,
    pub group_picks: Vec<GroupPick>,
    pub updated_at: DateTime<Utc>,
}

impl UserPicks {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            match_picks: Vec::new(),
            group_picks: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn match_pick(&self, match_id: MatchId) -> Option<&UserPick> {
        self.match_picks.iter().find(|p| p.match_id == match_id)
    }

    /// Selected teams for a group (empty if never picked).
    pub fn group_selection(&self, group_id: GroupId) -> &[TeamId] {
        self.group_picks
            .iter()
            .find(|p| p.group_id == group_id)
            .map(|p| p.selected_teams.as_slice())
            .unwrap_or(&[])
    }

    /// Record a match pick, replacing any earlier pick for the same match.
    pub fn set_match_pick(&mut self, match_id: MatchId, team_id: TeamId) {
        match self.match_picks.iter_mut().find(|p| p.match_id == match_id) {
            Some(existing) => existing.team_id = team_id,
            None => self.match_picks.push(UserPick { match_id, team_id }),
        }
        self.updated_at = Utc::now();
    }

    /// Replace the whole selection for a group (no merge).
    pub fn set_group_selection(&mut self, group_id: GroupId, selected_teams: Vec<TeamId>) {
        match self.group_picks.iter_mut().find(|p| p.group_id == group_id) {
            Some(existing) => existing.selected_teams = selected_teams,
            None => self.group_picks.push(GroupPick {
                group_id,
                selected_teams,
            }),
        }
        self.updated_at = Utc::now();
    }
}
