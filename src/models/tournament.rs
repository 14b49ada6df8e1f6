//! Tournament settings, roster and errors.

use crate::models::game::{BracketSide, Match, MatchId, RoundPolicy};
use crate::models::group::{Group, GroupId};
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during tournament and pick operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PickemsError {
    #[error("Tournament not found")]
    TournamentNotFound(TournamentId),
    #[error("Team not found")]
    TeamNotFound(TeamId),
    #[error("Group not found")]
    GroupNotFound(GroupId),
    #[error("Match not found")]
    MatchNotFound(MatchId),
    /// The picked or winning team is not in one of the match's two slots.
    #[error("Team is not playing in this match")]
    TeamNotInMatch(TeamId),
    #[error("Team is not in this group")]
    TeamNotInGroup(TeamId),
    #[error("Team is already in this group")]
    TeamAlreadyInGroup(TeamId),
    #[error("Group stage is locked!")]
    GroupStageLocked,
    #[error("Knockout stage is locked!")]
    KnockoutStageLocked,
    #[error("Group stage is not open")]
    GroupStageDisabled,
    #[error("Knockout stage is not open")]
    KnockoutStageDisabled,
    #[error("Name must not be empty")]
    EmptyName,
    /// Team names are unique (case-insensitive).
    #[error("A team with this name already exists")]
    DuplicateTeamName,
    #[error("Invalid CSV: {0}")]
    InvalidCsv(String),
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Partial update of a team; `None` leaves the field unchanged.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub seed: Option<u32>,
}

/// Partial update of the stage flags; `None` leaves the flag unchanged.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageUpdate {
    pub group_stage_enabled: Option<bool>,
    pub knockout_stage_enabled: Option<bool>,
    pub group_stage_locked: Option<bool>,
    pub knockout_stage_locked: Option<bool>,
}

/// A pickems tournament: roster, groups, matches and stage flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub teams: Vec<Team>,
    pub groups: Vec<Group>,
    /// Kept sorted by match number.
    pub matches: Vec<Match>,
    pub group_stage_enabled: bool,
    pub knockout_stage_enabled: bool,
    pub group_stage_locked: bool,
    pub knockout_stage_locked: bool,
    #[serde(default)]
    pub round_policy: RoundPolicy,
}

impl Tournament {
    /// Create an empty tournament with both stages open and unlocked.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            teams: Vec::new(),
            groups: Vec::new(),
            matches: Vec::new(),
            group_stage_enabled: true,
            knockout_stage_enabled: true,
            group_stage_locked: false,
            knockout_stage_locked: false,
            round_policy: RoundPolicy::default(),
        }
    }

    pub fn with_round_policy(mut self, policy: RoundPolicy) -> Self {
        self.round_policy = policy;
        self
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Add a team by name; seed defaults to the roster position.
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, PickemsError> {
        self.add_team_with(name, None, None)
    }

    /// Add a team with an explicit seed and logo. Names must be unique (case-insensitive).
    pub fn add_team_with(
        &mut self,
        name: impl Into<String>,
        seed: Option<u32>,
        logo: Option<String>,
    ) -> Result<TeamId, PickemsError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(PickemsError::EmptyName);
        }
        if self.teams.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(PickemsError::DuplicateTeamName);
        }
        let mut team = Team::new(name);
        team.seed = Some(seed.unwrap_or(self.teams.len() as u32 + 1));
        team.logo = logo.filter(|l| !l.trim().is_empty());
        let id = team.id;
        self.teams.push(team);
        self.touch();
        Ok(id)
    }

    /// Edit a team and propagate the new details into groups and match slots.
    pub fn update_team(&mut self, id: TeamId, update: TeamUpdate) -> Result<(), PickemsError> {
        if let Some(name) = update.name.as_deref() {
            let name = name.trim();
            if name.is_empty() {
                return Err(PickemsError::EmptyName);
            }
            let clash = self
                .teams
                .iter()
                .any(|t| t.id != id && t.name.eq_ignore_ascii_case(name));
            if clash {
                return Err(PickemsError::DuplicateTeamName);
            }
        }
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(PickemsError::TeamNotFound(id))?;
        if let Some(name) = update.name {
            team.name = name.trim().to_string();
        }
        if let Some(logo) = update.logo {
            team.logo = Some(logo).filter(|l| !l.trim().is_empty());
        }
        if let Some(seed) = update.seed {
            team.seed = Some(seed);
        }
        let updated = team.clone();

        let copies = self
            .groups
            .iter_mut()
            .flat_map(|g| g.teams.iter_mut())
            .chain(
                self.matches
                    .iter_mut()
                    .flat_map(|m| m.team1.iter_mut().chain(m.team2.iter_mut())),
            );
        for copy in copies.filter(|t| t.id == id) {
            *copy = updated.clone();
        }
        self.touch();
        Ok(())
    }

    /// Remove a team everywhere: roster, groups, advancing sets, match slots and winners.
    pub fn remove_team(&mut self, id: TeamId) -> Result<(), PickemsError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or(PickemsError::TeamNotFound(id))?;
        self.teams.remove(idx);
        for group in &mut self.groups {
            group.teams.retain(|t| t.id != id);
            if let Some(advancing) = group.advancing_teams.as_mut() {
                advancing.retain(|&t| t != id);
            }
        }
        for m in &mut self.matches {
            if m.team1.as_ref().is_some_and(|t| t.id == id) {
                m.team1 = None;
            }
            if m.team2.as_ref().is_some_and(|t| t.id == id) {
                m.team2 = None;
            }
            if m.winner == Some(id) {
                m.winner = None;
            }
        }
        self.touch();
        Ok(())
    }

    pub fn add_group(&mut self, name: impl Into<String>) -> Result<GroupId, PickemsError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(PickemsError::EmptyName);
        }
        let group = Group::new(name);
        let id = group.id;
        self.groups.push(group);
        self.touch();
        Ok(id)
    }

    pub fn remove_group(&mut self, id: GroupId) -> Result<(), PickemsError> {
        let idx = self
            .groups
            .iter()
            .position(|g| g.id == id)
            .ok_or(PickemsError::GroupNotFound(id))?;
        self.groups.remove(idx);
        self.touch();
        Ok(())
    }

    pub fn add_team_to_group(&mut self, group_id: GroupId, team_id: TeamId) -> Result<(), PickemsError> {
        let team = self
            .team(team_id)
            .cloned()
            .ok_or(PickemsError::TeamNotFound(team_id))?;
        let group = self
            .group_mut(group_id)
            .ok_or(PickemsError::GroupNotFound(group_id))?;
        if group.has_team(team_id) {
            return Err(PickemsError::TeamAlreadyInGroup(team_id));
        }
        group.teams.push(team);
        self.touch();
        Ok(())
    }

    pub fn remove_team_from_group(&mut self, group_id: GroupId, team_id: TeamId) -> Result<(), PickemsError> {
        let group = self
            .group_mut(group_id)
            .ok_or(PickemsError::GroupNotFound(group_id))?;
        if !group.has_team(team_id) {
            return Err(PickemsError::TeamNotInGroup(team_id));
        }
        group.teams.retain(|t| t.id != team_id);
        if let Some(advancing) = group.advancing_teams.as_mut() {
            advancing.retain(|&t| t != team_id);
        }
        self.touch();
        Ok(())
    }

    /// Append a match with TBD slots; its number follows the current highest.
    pub fn add_match(&mut self, round: impl Into<String>, bracket: BracketSide) -> Result<MatchId, PickemsError> {
        let round = round.into();
        let round = round.trim();
        if round.is_empty() {
            return Err(PickemsError::EmptyName);
        }
        let number = self.matches.iter().map(|m| m.number).max().unwrap_or(0) + 1;
        let m = Match::new(number, round, self.round_policy).with_bracket(bracket);
        let id = m.id;
        self.matches.push(m);
        self.touch();
        Ok(id)
    }

    pub fn rename_match_round(&mut self, id: MatchId, round: impl Into<String>) -> Result<(), PickemsError> {
        let round = round.into();
        let round = round.trim();
        if round.is_empty() {
            return Err(PickemsError::EmptyName);
        }
        let policy = self.round_policy;
        self.get_match_mut(id)
            .ok_or(PickemsError::MatchNotFound(id))?
            .set_round(round, policy);
        self.touch();
        Ok(())
    }

    /// Fill (or clear) both slots. A winner no longer in either slot is cleared.
    pub fn set_match_teams(
        &mut self,
        id: MatchId,
        team1: Option<TeamId>,
        team2: Option<TeamId>,
    ) -> Result<(), PickemsError> {
        let lookup = |team_id: Option<TeamId>| -> Result<Option<Team>, PickemsError> {
            team_id
                .map(|tid| self.team(tid).cloned().ok_or(PickemsError::TeamNotFound(tid)))
                .transpose()
        };
        let (team1, team2) = (lookup(team1)?, lookup(team2)?);
        let m = self.get_match_mut(id).ok_or(PickemsError::MatchNotFound(id))?;
        m.team1 = team1;
        m.team2 = team2;
        if let Some(winner) = m.winner {
            if !m.has_team(winner) {
                m.winner = None;
            }
        }
        self.touch();
        Ok(())
    }

    pub fn remove_match(&mut self, id: MatchId) -> Result<(), PickemsError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(PickemsError::MatchNotFound(id))?;
        self.matches.remove(idx);
        self.touch();
        Ok(())
    }

    pub fn update_stages(&mut self, update: StageUpdate) {
        if let Some(v) = update.group_stage_enabled {
            self.group_stage_enabled = v;
        }
        if let Some(v) = update.knockout_stage_enabled {
            self.knockout_stage_enabled = v;
        }
        if let Some(v) = update.group_stage_locked {
            self.group_stage_locked = v;
        }
        if let Some(v) = update.knockout_stage_locked {
            self.knockout_stage_locked = v;
        }
        self.touch();
    }

    /// Switch the round policy and reclassify every match under it.
    pub fn set_round_policy(&mut self, policy: RoundPolicy) {
        self.round_policy = policy;
        self.restage();
        self.touch();
    }

    /// Reclassify every match and restore match-number order (after loading a snapshot).
    pub fn restage(&mut self) {
        let policy = self.round_policy;
        for m in &mut self.matches {
            m.restage(policy);
        }
        self.matches.sort_by_key(|m| m.number);
    }
}
