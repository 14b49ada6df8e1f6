//! Leaderboard rows and the per-tournament leaderboard store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One ranked row: a user's total score.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub points: u32,
    pub correct_picks: u32,
}

/// Leaderboard keyed uniquely by username.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: HashMap<String, LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `entry.username`.
    pub fn upsert(&mut self, entry: LeaderboardEntry) {
        self.entries.insert(entry.username.clone(), entry);
    }

    pub fn get(&self, username: &str) -> Option<&LeaderboardEntry> {
        self.entries.get(username)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, points descending; ties by correct picks descending, then username.
    pub fn ranked(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<_> = self.entries.values().cloned().collect();
        sort_ranked(&mut entries);
        entries
    }
}

/// Sort entries into leaderboard order.
pub fn sort_ranked(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.correct_picks.cmp(&a.correct_picks))
            .then_with(|| a.username.cmp(&b.username))
    });
}
