//! Pickems web app: library with models, business logic, store and configuration.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::AppConfig;
pub use logic::{
    build_leaderboard, classify_round, derive_rounds, group_highlights, import_teams_csv,
    layout_bracket, leaderboard_csv, match_highlight, pick_match_winner, points_for_round,
    points_for_stage, populate_sample_tournament, score_picks, set_advancing_teams,
    set_match_winner, split_halves, toggle_group_team, BracketGeometry, BracketLayout, Score,
    SelectionQueue, Side, Toggle,
};
pub use models::{
    BracketSide, Group, GroupId, GroupPick, Leaderboard, LeaderboardEntry, Match, MatchId,
    PickemsError, RoundPolicy, RoundStage, StageUpdate, Team, TeamId, TeamUpdate, Tournament,
    TournamentId, UserPick, UserPicks,
};
pub use store::{PickemsStore, TournamentEntry};
