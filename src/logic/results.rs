//! Recording real-world results (admin): match winners and group qualifiers.

use crate::models::{GroupId, MatchId, PickemsError, TeamId, Tournament};

/// Set or clear the winner of a match. A winner must occupy one of the two slots.
pub fn set_match_winner(
    tournament: &mut Tournament,
    match_id: MatchId,
    winner: Option<TeamId>,
) -> Result<(), PickemsError> {
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(PickemsError::MatchNotFound(match_id))?;
    if let Some(team_id) = winner {
        if !m.has_team(team_id) {
            return Err(PickemsError::TeamNotInMatch(team_id));
        }
    }
    m.winner = winner;
    tournament.touch();
    Ok(())
}

/// Certify which teams advanced from a group. An empty list marks the group unresolved.
pub fn set_advancing_teams(
    tournament: &mut Tournament,
    group_id: GroupId,
    team_ids: &[TeamId],
) -> Result<(), PickemsError> {
    let group = tournament
        .group_mut(group_id)
        .ok_or(PickemsError::GroupNotFound(group_id))?;
    let mut advancing: Vec<TeamId> = Vec::with_capacity(team_ids.len());
    for &id in team_ids {
        if !group.has_team(id) {
            return Err(PickemsError::TeamNotInGroup(id));
        }
        if !advancing.contains(&id) {
            advancing.push(id);
        }
    }
    group.advancing_teams = if advancing.is_empty() {
        None
    } else {
        Some(advancing)
    };
    tournament.touch();
    Ok(())
}
