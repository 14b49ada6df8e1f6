//! Recording user picks: stage locks, membership checks, overwrite semantics.

use crate::logic::selection::{SelectionQueue, Toggle};
use crate::models::{GroupId, MatchId, PickemsError, TeamId, Tournament, UserPicks};

/// Record `team_id` as the predicted winner of `match_id`, replacing any earlier pick.
///
/// Rejected while the knockout stage is disabled or locked, and when the team is not
/// one of the match's two slots.
pub fn pick_match_winner(
    tournament: &Tournament,
    picks: &mut UserPicks,
    match_id: MatchId,
    team_id: TeamId,
) -> Result<(), PickemsError> {
    if !tournament.knockout_stage_enabled {
        return Err(PickemsError::KnockoutStageDisabled);
    }
    if tournament.knockout_stage_locked {
        return Err(PickemsError::KnockoutStageLocked);
    }
    let m = tournament
        .get_match(match_id)
        .ok_or(PickemsError::MatchNotFound(match_id))?;
    if !m.has_team(team_id) {
        return Err(PickemsError::TeamNotInMatch(team_id));
    }
    picks.set_match_pick(match_id, team_id);
    Ok(())
}

/// Toggle `team_id` in the user's qualifier selection for `group_id`.
///
/// Applies the two-slot FIFO rule and stores the new selection in place of the old
/// one. Returns what the toggle did together with the new selection.
pub fn toggle_group_team(
    tournament: &Tournament,
    picks: &mut UserPicks,
    group_id: GroupId,
    team_id: TeamId,
) -> Result<(Toggle, Vec<TeamId>), PickemsError> {
    if !tournament.group_stage_enabled {
        return Err(PickemsError::GroupStageDisabled);
    }
    if tournament.group_stage_locked {
        return Err(PickemsError::GroupStageLocked);
    }
    let group = tournament
        .group(group_id)
        .ok_or(PickemsError::GroupNotFound(group_id))?;
    if !group.has_team(team_id) {
        return Err(PickemsError::TeamNotInGroup(team_id));
    }

    let mut queue = SelectionQueue::for_group(picks.group_selection(group_id));
    let toggle = queue.toggle(team_id);
    let selection = queue.to_vec();
    picks.set_group_selection(group_id, selection.clone());
    Ok((toggle, selection))
}
