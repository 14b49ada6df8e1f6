//! Integration tests for round classification and the knockout bracket layout.

use pickems_web::{
    classify_round, derive_rounds, layout_bracket, points_for_round, split_halves, BracketGeometry,
    BracketLayout, BracketSide, Match, MatchId, RoundPolicy, RoundStage, Side, Tournament,
};

const EXCLUDE: RoundPolicy = RoundPolicy::ExcludeThirdPlace;
const INCLUDE: RoundPolicy = RoundPolicy::IncludeThirdPlace;

/// Tournament with `counts` matches for R16, QF, SF and the final, in that order.
fn bracket(counts: [usize; 4]) -> Tournament {
    let labels = ["Round of 16", "Quarter Finals", "Semi Finals", "Grand Final"];
    let mut t = Tournament::new("Bracket");
    for (label, count) in labels.iter().zip(counts) {
        for i in 1..=count {
            t.add_match(format!("{label} - Match {i}"), BracketSide::Upper)
                .unwrap();
        }
    }
    t
}

fn column_centers(layout: &BracketLayout, stage: RoundStage, side: Side) -> Vec<f64> {
    let h = layout.geometry.match_height;
    layout
        .columns
        .iter()
        .find(|c| c.stage == stage && c.side == side)
        .map(|c| c.boxes.iter().map(|b| b.y + h / 2.0).collect())
        .unwrap_or_default()
}

#[test]
fn classifier_follows_precedence() {
    let cases = [
        ("Round of 16 - Match 3", RoundStage::RoundOf16),
        ("Quarter Finals - Match 1", RoundStage::Quarterfinal),
        ("Quarterfinal 2", RoundStage::Quarterfinal),
        ("Semi Finals - Match 2", RoundStage::Semifinal),
        ("Semi Final", RoundStage::Semifinal),
        ("Grand Final", RoundStage::Final),
        ("Final", RoundStage::Final),
        ("Group A - Match 4", RoundStage::Unclassified),
        ("", RoundStage::Unclassified),
        ("grand final", RoundStage::Unclassified),
    ];
    for (label, expected) in cases {
        assert_eq!(classify_round(label, EXCLUDE), expected, "{label:?}");
    }
}

#[test]
fn third_place_depends_on_policy() {
    assert_eq!(classify_round("Third Place Final", EXCLUDE), RoundStage::Unclassified);
    assert_eq!(classify_round("Bronze Final", EXCLUDE), RoundStage::Unclassified);
    assert_eq!(classify_round("Third Place Final", INCLUDE), RoundStage::Final);
    // "Semi"/"Quarter" never become a final, whatever the policy.
    assert_eq!(classify_round("Semi Final", INCLUDE), RoundStage::Semifinal);
}

#[test]
fn points_follow_the_stage() {
    assert_eq!(points_for_round("Round of 16", EXCLUDE), 10);
    assert_eq!(points_for_round("Quarter Finals", EXCLUDE), 20);
    assert_eq!(points_for_round("Semi Finals", EXCLUDE), 30);
    assert_eq!(points_for_round("Grand Final", EXCLUDE), 50);
    assert_eq!(points_for_round("Bronze Final", EXCLUDE), 10);
    assert_eq!(points_for_round("Bronze Final", INCLUDE), 50);
}

#[test]
fn policy_change_reclassifies_existing_matches() {
    let mut t = Tournament::new("Policy");
    let id = t.add_match("Third Place Final", BracketSide::Finals).unwrap();
    assert_eq!(t.get_match(id).map(|m| m.stage), Some(RoundStage::Unclassified));

    t.set_round_policy(INCLUDE);
    assert_eq!(t.get_match(id).map(|m| m.stage), Some(RoundStage::Final));
}

#[test]
fn split_gives_the_left_half_the_extra_match() {
    let items = [1, 2, 3, 4, 5];
    let (left, right) = split_halves(&items);
    assert_eq!(left, &[1, 2, 3]);
    assert_eq!(right, &[4, 5]);

    let (left, right) = split_halves(&items[..4]);
    assert_eq!(left, &[1, 2]);
    assert_eq!(right, &[3, 4]);

    let (left, right) = split_halves::<i32>(&[]);
    assert!(left.is_empty() && right.is_empty());
}

#[test]
fn derive_rounds_keeps_order_and_drops_unclassified() {
    let matches = vec![
        Match::new(1, "Group A - Match 1", EXCLUDE),
        Match::new(2, "Round of 16 - Match 2", EXCLUDE),
        Match::new(3, "Round of 16 - Match 1", EXCLUDE),
        Match::new(4, "Grand Final", EXCLUDE),
    ];
    let rounds = derive_rounds(&matches);
    let r16: Vec<u32> = rounds.round_of_16.iter().map(|m| m.number).collect();
    assert_eq!(r16, vec![2, 3]);
    assert!(rounds.quarterfinals.is_empty());
    assert_eq!(rounds.finals.len(), 1);
}

#[test]
fn full_bracket_has_seven_columns_and_halves() {
    let t = bracket([8, 4, 2, 1]);
    let layout = layout_bracket(&t.matches, &BracketGeometry::default());

    let stages: Vec<(RoundStage, Side)> = layout.columns.iter().map(|c| (c.stage, c.side)).collect();
    assert_eq!(
        stages,
        vec![
            (RoundStage::RoundOf16, Side::Left),
            (RoundStage::Quarterfinal, Side::Left),
            (RoundStage::Semifinal, Side::Left),
            (RoundStage::Final, Side::Center),
            (RoundStage::Semifinal, Side::Right),
            (RoundStage::Quarterfinal, Side::Right),
            (RoundStage::RoundOf16, Side::Right),
        ]
    );

    let r16 = &layout.rounds[0];
    let ids: Vec<MatchId> = t.matches[..8].iter().map(|m| m.id).collect();
    assert_eq!(r16.left, ids[..4]);
    assert_eq!(r16.right, ids[4..]);
    assert_eq!(layout.width, 7.0 * 128.0 + 6.0 * 30.0);
}

#[test]
fn parents_sit_at_the_midpoint_of_their_children() {
    let t = bracket([8, 4, 2, 1]);
    let layout = layout_bracket(&t.matches, &BracketGeometry::default());

    assert_eq!(
        column_centers(&layout, RoundStage::RoundOf16, Side::Left),
        vec![24.0, 82.0, 140.0, 198.0]
    );
    assert_eq!(
        column_centers(&layout, RoundStage::Quarterfinal, Side::Left),
        vec![53.0, 169.0]
    );
    assert_eq!(column_centers(&layout, RoundStage::Semifinal, Side::Left), vec![111.0]);
    assert_eq!(column_centers(&layout, RoundStage::Final, Side::Center), vec![111.0]);
    assert_eq!(layout.height, 222.0);

    // Gap grows with each round.
    let gaps: Vec<f64> = layout.columns[..3].iter().map(|c| c.gap).collect();
    assert_eq!(gaps, vec![10.0, 68.0, 0.0]);
}

#[test]
fn right_half_mirrors_the_left_half() {
    let t = bracket([8, 4, 2, 1]);
    let layout = layout_bracket(&t.matches, &BracketGeometry::default());
    let w = layout.width;

    let left: Vec<_> = layout.connectors.iter().filter(|c| c.side == Side::Left).collect();
    let right: Vec<_> = layout.connectors.iter().filter(|c| c.side == Side::Right).collect();
    assert_eq!(left.len(), right.len());
    // Per side: 2 R16->QF, 1 QF->SF, 1 SF->Final.
    assert_eq!(left.len(), 4);

    for l in &left {
        let mirrored: Vec<(f64, f64, f64, f64)> = l
            .segments
            .iter()
            .map(|s| (w - s.x1, s.y1, w - s.x2, s.y2))
            .collect();
        let found = right.iter().any(|r| {
            r.from == l.from
                && r.to == l.to
                && r.segments
                    .iter()
                    .map(|s| (s.x1, s.y1, s.x2, s.y2))
                    .eq(mirrored.iter().copied())
        });
        assert!(found, "no mirror for {:?} -> {:?}", l.from, l.to);
    }
}

#[test]
fn connector_joins_two_children_to_the_parent() {
    let t = bracket([8, 4, 2, 1]);
    let layout = layout_bracket(&t.matches, &BracketGeometry::default());
    let first = &layout.connectors[0];
    assert_eq!(first.from, RoundStage::RoundOf16);
    assert_eq!(first.to, RoundStage::Quarterfinal);

    let segs: Vec<(f64, f64, f64, f64)> = first.segments.iter().map(|s| (s.x1, s.y1, s.x2, s.y2)).collect();
    assert_eq!(
        segs,
        vec![
            (128.0, 24.0, 143.0, 24.0),
            (128.0, 82.0, 143.0, 82.0),
            (143.0, 24.0, 143.0, 82.0),
            (143.0, 53.0, 158.0, 53.0),
        ]
    );
}

#[test]
fn empty_round_is_left_out_entirely() {
    let t = bracket([4, 0, 2, 1]);
    let layout = layout_bracket(&t.matches, &BracketGeometry::default());

    assert_eq!(layout.columns.len(), 5);
    assert!(layout.columns.iter().all(|c| c.stage != RoundStage::Quarterfinal));
    assert!(layout
        .connectors
        .iter()
        .all(|c| c.from != RoundStage::Quarterfinal && c.to != RoundStage::Quarterfinal));
    assert!(layout.rounds.iter().all(|r| r.stage != RoundStage::Quarterfinal));

    // Round of 16 feeds the semifinal directly.
    assert_eq!(column_centers(&layout, RoundStage::Semifinal, Side::Left), vec![53.0]);
    assert!(layout
        .connectors
        .iter()
        .any(|c| c.from == RoundStage::RoundOf16 && c.to == RoundStage::Semifinal));
}

#[test]
fn odd_round_puts_the_extra_match_on_the_left() {
    let t = bracket([0, 3, 0, 0]);
    let layout = layout_bracket(&t.matches, &BracketGeometry::default());
    assert_eq!(layout.rounds[0].left.len(), 2);
    assert_eq!(layout.rounds[0].right.len(), 1);
    assert_eq!(layout.columns.len(), 2);
}

#[test]
fn final_alone_is_a_single_column() {
    let t = bracket([0, 0, 0, 1]);
    let layout = layout_bracket(&t.matches, &BracketGeometry::default());
    assert_eq!(layout.columns.len(), 1);
    assert!(layout.connectors.is_empty());
    assert_eq!(layout.columns[0].boxes[0].y, 0.0);
    assert_eq!(layout.width, 128.0);
}

#[test]
fn no_knockout_matches_gives_an_empty_layout() {
    let matches = vec![Match::new(1, "Group A - Match 1", EXCLUDE)];
    let layout = layout_bracket(&matches, &BracketGeometry::default());
    assert!(layout.columns.is_empty());
    assert!(layout.connectors.is_empty());
    assert_eq!(layout.width, 0.0);
    assert_eq!(layout.height, 0.0);
}
