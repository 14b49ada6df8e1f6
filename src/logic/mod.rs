//! Pickems business logic: round classification, scoring, bracket layout, picks, results.

mod bracket;
mod import;
mod picks;
mod results;
mod rounds;
mod scoring;
mod selection;
mod setup;

pub use bracket::{
    derive_rounds, layout_bracket, split_halves, BracketGeometry, BracketLayout, BracketRounds,
    Column, Connector, MatchBox, RoundHalves, Segment, Side,
};
pub use import::{import_teams_csv, leaderboard_csv};
pub use picks::{pick_match_winner, toggle_group_team};
pub use results::{set_advancing_teams, set_match_winner};
pub use rounds::{classify_round, points_for_round, points_for_stage, GROUP_PICK_POINTS};
pub use scoring::{build_leaderboard, score_picks, Score};
pub use selection::{
    group_highlights, match_highlight, MatchHighlight, SelectionQueue, TeamHighlight, Toggle,
    GROUP_SELECTION_SIZE,
};
pub use setup::populate_sample_tournament;
