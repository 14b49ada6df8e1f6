//! CSV bulk team import and leaderboard export.

use crate::models::{LeaderboardEntry, PickemsError, TeamId, Tournament};
use serde::{Deserialize, Serialize};

/// One row of a team import file: `name,seed,logo` (seed and logo may be blank).
#[derive(Debug, Deserialize)]
struct TeamRow {
    name: String,
    #[serde(default)]
    seed: Option<u32>,
    #[serde(default)]
    logo: Option<String>,
}

/// Add every team listed in `csv_text` (header row required).
///
/// All-or-nothing: a malformed row or a duplicate name leaves the roster untouched.
pub fn import_teams_csv(tournament: &mut Tournament, csv_text: &str) -> Result<Vec<TeamId>, PickemsError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    let rows = reader
        .deserialize::<TeamRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| PickemsError::InvalidCsv(e.to_string()))?;

    let mut staged = tournament.clone();
    let mut added = Vec::with_capacity(rows.len());
    for row in rows {
        added.push(staged.add_team_with(row.name, row.seed, row.logo)?);
    }
    *tournament = staged;
    log::info!("Imported {} team(s) into tournament {}", added.len(), tournament.id);
    Ok(added)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeaderboardRow<'a> {
    rank: usize,
    username: &'a str,
    points: u32,
    correct_picks: u32,
}

/// Render ranked entries as CSV: `rank,username,points,correctPicks`.
pub fn leaderboard_csv(entries: &[LeaderboardEntry]) -> Result<String, PickemsError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (i, e) in entries.iter().enumerate() {
        writer
            .serialize(LeaderboardRow {
                rank: i + 1,
                username: &e.username,
                points: e.points,
                correct_picks: e.correct_picks,
            })
            .map_err(|e| PickemsError::InvalidCsv(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| PickemsError::InvalidCsv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| PickemsError::InvalidCsv(e.to_string()))
}
