//! In-memory tournament store: tournaments, every user's picks, and the leaderboards.

use crate::logic::build_leaderboard;
use crate::models::{Leaderboard, LeaderboardEntry, PickemsError, Tournament, TournamentId, UserPicks};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One tournament with its picks (keyed by username) and derived leaderboard.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentEntry {
    pub tournament: Tournament,
    pub picks: BTreeMap<String, UserPicks>,
    #[serde(default)]
    pub leaderboard: Leaderboard,
}

impl TournamentEntry {
    pub fn new(tournament: Tournament) -> Self {
        Self {
            tournament,
            picks: BTreeMap::new(),
            leaderboard: Leaderboard::new(),
        }
    }

    /// Make sure `username` has a picks record (and therefore a leaderboard row).
    pub fn register(&mut self, username: &str) {
        if !self.picks.contains_key(username) {
            self.picks.insert(username.to_string(), UserPicks::new(username));
            self.refresh_leaderboard();
        }
    }

    /// Run `f` against a copy of the user's picks, then store it and rescore everyone.
    ///
    /// On error nothing is stored, not even a record for a first-time user.
    pub fn with_picks<T>(
        &mut self,
        username: &str,
        f: impl FnOnce(&Tournament, &mut UserPicks) -> Result<T, PickemsError>,
    ) -> Result<T, PickemsError> {
        let mut picks = self
            .picks
            .get(username)
            .cloned()
            .unwrap_or_else(|| UserPicks::new(username));
        let out = f(&self.tournament, &mut picks)?;
        self.picks.insert(username.to_string(), picks);
        self.refresh_leaderboard();
        Ok(out)
    }

    /// Run an admin edit against the tournament, then rescore everyone.
    pub fn edit<T>(
        &mut self,
        f: impl FnOnce(&mut Tournament) -> Result<T, PickemsError>,
    ) -> Result<T, PickemsError> {
        let out = f(&mut self.tournament)?;
        self.refresh_leaderboard();
        Ok(out)
    }

    /// Recompute every user's score from scratch and upsert it.
    pub fn refresh_leaderboard(&mut self) {
        self.leaderboard.clear();
        for entry in build_leaderboard(&self.tournament, self.picks.values()) {
            self.leaderboard.upsert(entry);
        }
    }

    pub fn ranked(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.ranked()
    }
}

/// All tournaments, keyed by id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PickemsStore {
    pub tournaments: HashMap<TournamentId, TournamentEntry>,
}

impl PickemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, tournament: Tournament) -> &mut TournamentEntry {
        let id = tournament.id;
        log::info!("Created tournament {} ({})", tournament.name, id);
        self.tournaments
            .entry(id)
            .or_insert_with(|| TournamentEntry::new(tournament))
    }

    pub fn get(&self, id: TournamentId) -> Result<&TournamentEntry, PickemsError> {
        self.tournaments
            .get(&id)
            .ok_or(PickemsError::TournamentNotFound(id))
    }

    pub fn get_mut(&mut self, id: TournamentId) -> Result<&mut TournamentEntry, PickemsError> {
        self.tournaments
            .get_mut(&id)
            .ok_or(PickemsError::TournamentNotFound(id))
    }

    /// Most recently created tournament (the one the front page shows).
    /// Same-instant ties go to the highest id, matching the head of [`Self::list`].
    pub fn latest(&self) -> Option<&TournamentEntry> {
        self.tournaments
            .values()
            .max_by_key(|e| (e.tournament.created_at, e.tournament.id))
    }

    /// All tournaments, newest first; same-instant ties ordered by id, descending.
    pub fn list(&self) -> Vec<&Tournament> {
        let mut list: Vec<_> = self.tournaments.values().map(|e| &e.tournament).collect();
        list.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        list
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load a snapshot; match stages and leaderboards are rebuilt rather than trusted.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut store: Self = serde_json::from_str(json)?;
        for entry in store.tournaments.values_mut() {
            entry.tournament.restage();
            entry.refresh_leaderboard();
        }
        Ok(store)
    }
}
