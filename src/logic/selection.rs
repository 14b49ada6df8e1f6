//! Group qualifier selection (bounded FIFO of two teams) and pick highlighting.

use crate::models::{Group, Match, TeamId};
use serde::Serialize;
use std::collections::VecDeque;

/// Number of qualifiers a user predicts per group.
pub const GROUP_SELECTION_SIZE: usize = 2;

/// What a toggle did to the selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "evicted")]
pub enum Toggle {
    Added,
    Removed,
    /// The queue was full: the oldest team was dropped to make room.
    Replaced(TeamId),
}

/// Fixed-capacity selection with first-in-first-out eviction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectionQueue {
    capacity: usize,
    items: VecDeque<TeamId>,
}

impl SelectionQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Queue for a group pick, seeded from a stored selection (oldest first).
    /// Duplicates are dropped; if too long only the most recent teams are kept.
    pub fn for_group(selected: &[TeamId]) -> Self {
        let mut queue = Self::new(GROUP_SELECTION_SIZE);
        for &team in selected {
            if !queue.contains(team) {
                queue.push(team);
            }
        }
        queue
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, team: TeamId) -> bool {
        self.items.contains(&team)
    }

    /// Remove `team` if selected, otherwise add it, evicting the oldest when full.
    pub fn toggle(&mut self, team: TeamId) -> Toggle {
        if let Some(pos) = self.items.iter().position(|&t| t == team) {
            self.items.remove(pos);
            return Toggle::Removed;
        }
        match self.push(team) {
            Some(evicted) => Toggle::Replaced(evicted),
            None => Toggle::Added,
        }
    }

    fn push(&mut self, team: TeamId) -> Option<TeamId> {
        if self.capacity == 0 {
            return Some(team);
        }
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(team);
        evicted
    }

    /// Selection, oldest first.
    pub fn to_vec(&self) -> Vec<TeamId> {
        self.items.iter().copied().collect()
    }
}

/// Display state of one team in a group card.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamHighlight {
    pub team_id: TeamId,
    pub selected: bool,
    /// 1-based position in the selection, if selected.
    pub selection_order: Option<usize>,
    /// Team advanced (only once results are in).
    pub correct: bool,
    /// Team was picked but did not advance.
    pub wrong: bool,
}

/// Highlight every team of `group` for a user who selected `selected`.
pub fn group_highlights(group: &Group, selected: &[TeamId]) -> Vec<TeamHighlight> {
    let advancing = group.resolved_advancing();
    group
        .teams
        .iter()
        .map(|team| {
            let order = selected.iter().position(|&t| t == team.id);
            let is_selected = order.is_some();
            let correct = advancing.is_some_and(|a| a.contains(&team.id));
            TeamHighlight {
                team_id: team.id,
                selected: is_selected,
                selection_order: order.map(|i| i + 1),
                correct,
                wrong: advancing.is_some() && is_selected && !correct,
            }
        })
        .collect()
}

/// Display state of a knockout match for one user.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHighlight {
    pub picked: Option<TeamId>,
    pub winner: Option<TeamId>,
    pub correct: bool,
    pub wrong: bool,
}

pub fn match_highlight(m: &Match, picked: Option<TeamId>) -> MatchHighlight {
    let correct = m.winner.is_some() && picked == m.winner;
    MatchHighlight {
        picked,
        winner: m.winner,
        correct,
        wrong: m.winner.is_some() && picked.is_some() && !correct,
    }
}
