//! Setup: fill a tournament with a complete sample field (groups + knockout bracket).

use crate::models::{BracketSide, Group, Match, Team, Tournament};

const SAMPLE_TEAM_NAMES: [&str; 32] = [
    "Phoenix Rising", "Dragon Warriors", "Shadow Legends", "Storm Breakers",
    "Iron Titans", "Frost Giants", "Thunder Hawks", "Crimson Blades",
    "Silver Wolves", "Golden Eagles", "Dark Knights", "Mystic Guardians",
    "Flame Serpents", "Ice Dragons", "Lightning Lions", "Steel Panthers",
    "Emerald Hunters", "Ruby Raptors", "Sapphire Sharks", "Diamond Demons",
    "Platinum Pirates", "Crystal Crusaders", "Obsidian Owls", "Jade Jaguars",
    "Onyx Oracles", "Amber Assassins", "Pearl Predators", "Topaz Titans",
    "Garnet Gladiators", "Quartz Queens", "Opal Outlaws", "Zircon Zealots",
];

const GROUP_NAMES: [&str; 4] = ["Group A", "Group B", "Group C", "Group D"];

/// Knockout rounds of the sample bracket: label and number of matches.
const KNOCKOUT_ROUNDS: [(&str, usize); 4] = [
    ("Round of 16", 8),
    ("Quarter Finals", 4),
    ("Semi Finals", 2),
    ("Grand Final", 1),
];

/// Replace the tournament's roster with a sample field.
///
/// 1. 32 teams seeded 1..=32.
/// 2. 4 groups of 8 teams in seed order.
/// 3. Round-robin matches inside each group ("Group A - Match n").
/// 4. An empty 16-team knockout bracket; the Grand Final sits on the finals side.
///
/// Picks made against the previous roster no longer resolve and score nothing.
pub fn populate_sample_tournament(tournament: &mut Tournament) {
    let policy = tournament.round_policy;
    let teams: Vec<Team> = SAMPLE_TEAM_NAMES
        .iter()
        .zip(1..)
        .map(|(name, seed)| Team::new(*name).with_seed(seed))
        .collect();

    let per_group = teams.len() / GROUP_NAMES.len();
    let groups: Vec<Group> = GROUP_NAMES
        .iter()
        .zip(teams.chunks(per_group))
        .map(|(name, chunk)| Group::new(*name).with_teams(chunk.to_vec()))
        .collect();

    let mut matches = Vec::new();
    let mut number = 0;
    for group in &groups {
        let mut in_group = 0;
        for (i, home) in group.teams.iter().enumerate() {
            for away in &group.teams[i + 1..] {
                number += 1;
                in_group += 1;
                let round = format!("{} - Match {}", group.name, in_group);
                matches.push(
                    Match::new(number, round, policy)
                        .with_teams(Some(home.clone()), Some(away.clone())),
                );
            }
        }
    }

    for (name, count) in KNOCKOUT_ROUNDS {
        let bracket = if name == "Grand Final" {
            BracketSide::Finals
        } else {
            BracketSide::Upper
        };
        for i in 1..=count {
            number += 1;
            matches.push(Match::new(number, format!("{name} - Match {i}"), policy).with_bracket(bracket));
        }
    }

    log::info!(
        "Populated tournament {} with {} teams, {} groups, {} matches",
        tournament.id,
        teams.len(),
        groups.len(),
        matches.len()
    );
    tournament.teams = teams;
    tournament.groups = groups;
    tournament.matches = matches;
    tournament.touch();
}
