//! Integration tests for scoring picks against recorded results.

use pickems_web::{
    build_leaderboard, pick_match_winner, score_picks, set_advancing_teams, set_match_winner,
    toggle_group_team, BracketSide, GroupId, MatchId, PickemsError, TeamId, Tournament, UserPicks,
};
use uuid::Uuid;

struct Fixture {
    t: Tournament,
    teams: Vec<TeamId>,
}

fn fixture(n: usize) -> Fixture {
    let mut t = Tournament::new("Test Cup");
    let teams = (0..n)
        .map(|i| t.add_team(format!("Team {i}")).unwrap())
        .collect();
    Fixture { t, teams }
}

fn knockout_match(f: &mut Fixture, round: &str, a: usize, b: usize) -> MatchId {
    let id = f.t.add_match(round, BracketSide::Upper).unwrap();
    f.t.set_match_teams(id, Some(f.teams[a]), Some(f.teams[b])).unwrap();
    id
}

fn group_of(f: &mut Fixture, name: &str, members: &[usize]) -> GroupId {
    let gid = f.t.add_group(name).unwrap();
    for &i in members {
        f.t.add_team_to_group(gid, f.teams[i]).unwrap();
    }
    gid
}

#[test]
fn correct_round_of_16_pick_scores_10() {
    let mut f = fixture(2);
    let m = knockout_match(&mut f, "Round of 16 - Match 1", 0, 1);
    set_match_winner(&mut f.t, m, Some(f.teams[0])).unwrap();

    let mut picks = UserPicks::new("alice");
    pick_match_winner(&f.t, &mut picks, m, f.teams[0]).unwrap();

    let score = score_picks(&f.t, &picks);
    assert_eq!(score.points, 10);
    assert_eq!(score.correct_picks, 1);
}

#[test]
fn wrong_final_pick_scores_nothing() {
    let mut f = fixture(2);
    let m = knockout_match(&mut f, "Grand Final", 0, 1);
    set_match_winner(&mut f.t, m, Some(f.teams[0])).unwrap();

    let mut picks = UserPicks::new("bob");
    pick_match_winner(&f.t, &mut picks, m, f.teams[1]).unwrap();

    let score = score_picks(&f.t, &picks);
    assert_eq!(score.points, 0);
    assert_eq!(score.correct_picks, 0);
}

#[test]
fn one_of_two_group_qualifiers_scores_5() {
    let mut f = fixture(4);
    let g = group_of(&mut f, "Group A", &[0, 1, 2, 3]);
    set_advancing_teams(&mut f.t, g, &[f.teams[0], f.teams[1]]).unwrap();

    let mut picks = UserPicks::new("carol");
    toggle_group_team(&f.t, &mut picks, g, f.teams[0]).unwrap();
    toggle_group_team(&f.t, &mut picks, g, f.teams[2]).unwrap();

    let score = score_picks(&f.t, &picks);
    assert_eq!(score.points, 5);
    assert_eq!(score.correct_picks, 1);
}

#[test]
fn both_group_qualifiers_score_10() {
    let mut f = fixture(4);
    let g = group_of(&mut f, "Group A", &[0, 1, 2, 3]);
    set_advancing_teams(&mut f.t, g, &[f.teams[1], f.teams[3]]).unwrap();

    let mut picks = UserPicks::new("dave");
    toggle_group_team(&f.t, &mut picks, g, f.teams[3]).unwrap();
    toggle_group_team(&f.t, &mut picks, g, f.teams[1]).unwrap();

    let score = score_picks(&f.t, &picks);
    assert_eq!(score.points, 10);
    assert_eq!(score.correct_picks, 2);
}

#[test]
fn stage_points_are_summed_across_rounds() {
    let mut f = fixture(2);
    let rounds = [
        ("Round of 16 - Match 1", 10),
        ("Quarter Finals - Match 1", 20),
        ("Semi Finals - Match 1", 30),
        ("Grand Final", 50),
        ("Group A - Match 1", 10),
    ];
    let mut picks = UserPicks::new("erin");
    for (round, _) in rounds {
        let m = knockout_match(&mut f, round, 0, 1);
        set_match_winner(&mut f.t, m, Some(f.teams[0])).unwrap();
        pick_match_winner(&f.t, &mut picks, m, f.teams[0]).unwrap();
    }

    let score = score_picks(&f.t, &picks);
    let expected: u32 = rounds.iter().map(|(_, pts)| pts).sum();
    assert_eq!(score.points, expected);
    assert_eq!(score.correct_picks, rounds.len() as u32);
}

#[test]
fn unresolved_results_score_nothing() {
    let mut f = fixture(4);
    let m = knockout_match(&mut f, "Semi Finals - Match 1", 0, 1);
    let g = group_of(&mut f, "Group A", &[0, 1, 2, 3]);

    let mut picks = UserPicks::new("frank");
    pick_match_winner(&f.t, &mut picks, m, f.teams[0]).unwrap();
    toggle_group_team(&f.t, &mut picks, g, f.teams[0]).unwrap();

    assert_eq!(score_picks(&f.t, &picks).points, 0);

    // An empty advancing list leaves the group unresolved.
    set_advancing_teams(&mut f.t, g, &[]).unwrap();
    assert_eq!(score_picks(&f.t, &picks).points, 0);
}

#[test]
fn scoring_is_idempotent() {
    let mut f = fixture(2);
    let m = knockout_match(&mut f, "Quarter Finals - Match 1", 0, 1);
    set_match_winner(&mut f.t, m, Some(f.teams[1])).unwrap();
    let mut picks = UserPicks::new("gina");
    pick_match_winner(&f.t, &mut picks, m, f.teams[1]).unwrap();

    let first = score_picks(&f.t, &picks);
    let second = score_picks(&f.t, &picks);
    assert_eq!(first, second);
    assert_eq!(first.points, 20);
}

#[test]
fn picks_for_deleted_matches_and_groups_are_skipped() {
    let mut f = fixture(4);
    let m = knockout_match(&mut f, "Round of 16 - Match 1", 0, 1);
    let g = group_of(&mut f, "Group A", &[0, 1, 2, 3]);
    set_match_winner(&mut f.t, m, Some(f.teams[0])).unwrap();
    set_advancing_teams(&mut f.t, g, &[f.teams[0], f.teams[1]]).unwrap();

    let mut picks = UserPicks::new("hank");
    pick_match_winner(&f.t, &mut picks, m, f.teams[0]).unwrap();
    toggle_group_team(&f.t, &mut picks, g, f.teams[0]).unwrap();
    picks.set_match_pick(Uuid::new_v4(), f.teams[0]);
    assert_eq!(score_picks(&f.t, &picks).points, 15);

    f.t.remove_match(m).unwrap();
    f.t.remove_group(g).unwrap();
    assert_eq!(score_picks(&f.t, &picks).points, 0);
}

#[test]
fn renaming_a_round_rescores_with_the_new_stage() {
    let mut f = fixture(2);
    let m = knockout_match(&mut f, "Round of 16 - Match 1", 0, 1);
    set_match_winner(&mut f.t, m, Some(f.teams[0])).unwrap();
    let mut picks = UserPicks::new("iris");
    pick_match_winner(&f.t, &mut picks, m, f.teams[0]).unwrap();
    assert_eq!(score_picks(&f.t, &picks).points, 10);

    f.t.rename_match_round(m, "Grand Final").unwrap();
    assert_eq!(score_picks(&f.t, &picks).points, 50);
}

#[test]
fn match_pick_must_name_a_team_in_the_match() {
    let mut f = fixture(3);
    let m = knockout_match(&mut f, "Round of 16 - Match 1", 0, 1);
    let mut picks = UserPicks::new("jack");

    assert_eq!(
        pick_match_winner(&f.t, &mut picks, m, f.teams[2]),
        Err(PickemsError::TeamNotInMatch(f.teams[2]))
    );
    assert!(matches!(
        pick_match_winner(&f.t, &mut picks, Uuid::new_v4(), f.teams[0]),
        Err(PickemsError::MatchNotFound(_))
    ));
    assert!(picks.match_picks.is_empty());
}

#[test]
fn repicking_a_match_replaces_the_earlier_pick() {
    let mut f = fixture(2);
    let m = knockout_match(&mut f, "Round of 16 - Match 1", 0, 1);
    let mut picks = UserPicks::new("kate");
    pick_match_winner(&f.t, &mut picks, m, f.teams[0]).unwrap();
    pick_match_winner(&f.t, &mut picks, m, f.teams[1]).unwrap();

    assert_eq!(picks.match_picks.len(), 1);
    assert_eq!(picks.match_pick(m).map(|p| p.team_id), Some(f.teams[1]));
}

#[test]
fn knockout_lock_rejects_match_picks() {
    let mut f = fixture(2);
    let m = knockout_match(&mut f, "Round of 16 - Match 1", 0, 1);
    f.t.knockout_stage_locked = true;
    let mut picks = UserPicks::new("liam");
    assert_eq!(
        pick_match_winner(&f.t, &mut picks, m, f.teams[0]),
        Err(PickemsError::KnockoutStageLocked)
    );

    f.t.knockout_stage_locked = false;
    f.t.knockout_stage_enabled = false;
    assert_eq!(
        pick_match_winner(&f.t, &mut picks, m, f.teams[0]),
        Err(PickemsError::KnockoutStageDisabled)
    );
}

#[test]
fn leaderboard_ranks_by_points_then_correct_picks_then_name() {
    let mut f = fixture(6);
    let r16_a = knockout_match(&mut f, "Round of 16 - Match 1", 0, 1);
    let r16_b = knockout_match(&mut f, "Round of 16 - Match 2", 2, 3);
    let qf = knockout_match(&mut f, "Quarter Finals - Match 1", 4, 5);
    set_match_winner(&mut f.t, r16_a, Some(f.teams[0])).unwrap();
    set_match_winner(&mut f.t, r16_b, Some(f.teams[2])).unwrap();
    set_match_winner(&mut f.t, qf, Some(f.teams[4])).unwrap();

    // zoe and amy both have 20 points; amy got there with two correct picks.
    let mut zoe = UserPicks::new("zoe");
    pick_match_winner(&f.t, &mut zoe, qf, f.teams[4]).unwrap();
    let mut amy = UserPicks::new("amy");
    pick_match_winner(&f.t, &mut amy, r16_a, f.teams[0]).unwrap();
    pick_match_winner(&f.t, &mut amy, r16_b, f.teams[2]).unwrap();
    let mut cal = UserPicks::new("cal");
    pick_match_winner(&f.t, &mut cal, r16_a, f.teams[0]).unwrap();
    let mut ben = UserPicks::new("ben");
    pick_match_winner(&f.t, &mut ben, r16_b, f.teams[2]).unwrap();
    let mut max = UserPicks::new("max");
    pick_match_winner(&f.t, &mut max, r16_a, f.teams[0]).unwrap();
    pick_match_winner(&f.t, &mut max, r16_b, f.teams[2]).unwrap();
    pick_match_winner(&f.t, &mut max, qf, f.teams[4]).unwrap();
    let nobody = UserPicks::new("nobody");

    let board = build_leaderboard(&f.t, [&zoe, &amy, &cal, &ben, &max, &nobody]);
    let order: Vec<(&str, u32, u32)> = board
        .iter()
        .map(|e| (e.username.as_str(), e.points, e.correct_picks))
        .collect();
    assert_eq!(
        order,
        vec![
            ("max", 40, 3),
            ("amy", 20, 2),
            ("zoe", 20, 1),
            ("ben", 10, 1),
            ("cal", 10, 1),
            ("nobody", 0, 0),
        ]
    );
}
