//! Data structures for pickems: teams, groups, matches, picks, leaderboard, tournament.

mod game;
mod group;
mod leaderboard;
mod pick;
mod team;
mod tournament;

pub use game::{BracketSide, Match, MatchId, RoundPolicy, RoundStage};
pub use group::{Group, GroupId};
pub use leaderboard::{sort_ranked, Leaderboard, LeaderboardEntry};
pub use pick::{GroupPick, UserPick, UserPicks};
pub use team::{Team, TeamId};
pub use tournament::{PickemsError, StageUpdate, TeamUpdate, Tournament, TournamentId};
