//! Scoring: a user's picks against recorded results, and the leaderboard built from it.

use crate::logic::rounds::{points_for_stage, GROUP_PICK_POINTS};
use crate::models::{sort_ranked, LeaderboardEntry, Tournament, UserPicks};
use serde::Serialize;

/// Outcome of scoring one user's picks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub points: u32,
    pub correct_picks: u32,
}

impl Score {
    fn credit(&mut self, points: u32) {
        self.points += points;
        self.correct_picks += 1;
    }
}

/// Score `picks` against the recorded results in `tournament`.
///
/// Each selected team that is in its group's advancing set earns 5 points. Each
/// match pick equal to the recorded winner earns the stage's points (10/20/30/50,
/// unclassified rounds 10). Picks whose group or match no longer exists, and matches
/// without a winner, contribute nothing.
pub fn score_picks(tournament: &Tournament, picks: &UserPicks) -> Score {
    let mut score = Score::default();

    for gp in &picks.group_picks {
        let Some(advancing) = tournament
            .group(gp.group_id)
            .and_then(|g| g.resolved_advancing())
        else {
            continue;
        };
        for team_id in &gp.selected_teams {
            if advancing.contains(team_id) {
                score.credit(GROUP_PICK_POINTS);
            }
        }
    }

    for up in &picks.match_picks {
        let Some(m) = tournament.get_match(up.match_id) else {
            continue;
        };
        if m.winner == Some(up.team_id) {
            score.credit(points_for_stage(m.stage));
        }
    }

    score
}

/// Score every user and return leaderboard rows, points descending.
///
/// Ties are ordered by correct picks (descending), then username.
pub fn build_leaderboard<'a>(
    tournament: &Tournament,
    users: impl IntoIterator<Item = &'a UserPicks>,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = users
        .into_iter()
        .map(|picks| {
            let score = score_picks(tournament, picks);
            LeaderboardEntry {
                username: picks.username.clone(),
                points: score.points,
                correct_picks: score.correct_picks,
            }
        })
        .collect();
    sort_ranked(&mut entries);
    entries
}
