//! Match, RoundStage and BracketSide for knockout and group-stage matches.

use crate::logic::classify_round;
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Bracket stage a match belongs to, derived from its free-text round label.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStage {
    RoundOf16,
    Quarterfinal,
    Semifinal,
    Final,
    /// Label matched none of the bracket rounds (group-stage matches, "Third Place", typos).
    #[default]
    Unclassified,
}

/// Whether "Third"/"Bronze" labels are kept out of the Final stage.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPolicy {
    #[default]
    ExcludeThirdPlace,
    IncludeThirdPlace,
}

impl std::str::FromStr for RoundPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "exclude_third_place" => Ok(RoundPolicy::ExcludeThirdPlace),
            "include_third_place" => Ok(RoundPolicy::IncludeThirdPlace),
            other => Err(format!("unknown round policy: {other}")),
        }
    }
}

/// Which side of the bracket the match was entered on (display only).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketSide {
    #[default]
    Upper,
    Lower,
    Finals,
}

/// A single match between two (possibly not yet known) teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    /// Admin-facing match number; matches are kept in this order.
    pub number: u32,
    /// None while the slot is still TBD.
    pub team1: Option<Team>,
    pub team2: Option<Team>,
    /// Set by the admin once the real result is known.
    pub winner: Option<TeamId>,
    /// Free-text label, e.g. "Quarter Finals - Match 2".
    pub round: String,
    /// Derived from `round`; refreshed on rename and policy change.
    #[serde(default)]
    pub stage: RoundStage,
    #[serde(default)]
    pub bracket: BracketSide,
}

impl Match {
    /// Create a match with empty slots, classifying `round` under `policy`.
    pub fn new(number: u32, round: impl Into<String>, policy: RoundPolicy) -> Self {
        let round = round.into();
        Self {
            id: Uuid::new_v4(),
            number,
            team1: None,
            team2: None,
            winner: None,
            stage: classify_round(&round, policy),
            round,
            bracket: BracketSide::Upper,
        }
    }

    pub fn with_teams(mut self, team1: Option<Team>, team2: Option<Team>) -> Self {
        self.team1 = team1;
        self.team2 = team2;
        self
    }

    pub fn with_bracket(mut self, bracket: BracketSide) -> Self {
        self.bracket = bracket;
        self
    }

    /// Rename the round and reclassify it.
    pub fn set_round(&mut self, round: impl Into<String>, policy: RoundPolicy) {
        self.round = round.into();
        self.restage(policy);
    }

    pub fn restage(&mut self, policy: RoundPolicy) {
        self.stage = classify_round(&self.round, policy);
    }

    /// True if `team_id` occupies one of the two slots.
    pub fn has_team(&self, team_id: TeamId) -> bool {
        self.team_ids().any(|id| id == team_id)
    }

    /// Ids of the teams currently in the slots (0, 1 or 2).
    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> + '_ {
        self.team1.iter().chain(self.team2.iter()).map(|t| t.id)
    }
}
