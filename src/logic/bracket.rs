//! Knockout bracket: rounds from match stages, left/right halves, and a mirrored tree layout.
//!
//! Column order, left to right:
//! R16 | conn | QF | conn | SF | conn | Final | conn | SF | conn | QF | conn | R16
//!
//! Empty rounds are skipped entirely; the neighbouring columns close up and connect
//! directly to each other.

use crate::models::{Match, MatchId, RoundStage};
use serde::{Deserialize, Serialize};

/// Presentation constants for the layout, in abstract units (pixels in the web UI).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BracketGeometry {
    /// Rendered height of one match box (two team rows).
    pub match_height: f64,
    pub match_width: f64,
    /// Vertical gap between boxes of the outermost round.
    pub base_gap: f64,
    /// Horizontal space between adjacent columns, where connectors are drawn.
    pub connector_width: f64,
}

impl Default for BracketGeometry {
    fn default() -> Self {
        Self {
            match_height: 48.0,
            match_width: 128.0,
            base_gap: 10.0,
            connector_width: 30.0,
        }
    }
}

/// Bracket matches grouped by stage, in arrival order. Unclassified matches are dropped.
#[derive(Clone, Debug, Default)]
pub struct BracketRounds<'a> {
    pub round_of_16: Vec<&'a Match>,
    pub quarterfinals: Vec<&'a Match>,
    pub semifinals: Vec<&'a Match>,
    pub finals: Vec<&'a Match>,
}

impl<'a> BracketRounds<'a> {
    pub fn stage(&self, stage: RoundStage) -> &[&'a Match] {
        match stage {
            RoundStage::RoundOf16 => &self.round_of_16,
            RoundStage::Quarterfinal => &self.quarterfinals,
            RoundStage::Semifinal => &self.semifinals,
            RoundStage::Final => &self.finals,
            RoundStage::Unclassified => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.round_of_16.is_empty()
            && self.quarterfinals.is_empty()
            && self.semifinals.is_empty()
            && self.finals.is_empty()
    }
}

/// Rounds drawn on each half of the tree, outermost first.
const SIDE_STAGES: [RoundStage; 3] = [
    RoundStage::RoundOf16,
    RoundStage::Quarterfinal,
    RoundStage::Semifinal,
];

/// Partition `matches` into bracket rounds by their stage, keeping input order.
pub fn derive_rounds(matches: &[Match]) -> BracketRounds<'_> {
    let mut rounds = BracketRounds::default();
    let mut dropped = 0;
    for m in matches {
        match m.stage {
            RoundStage::RoundOf16 => rounds.round_of_16.push(m),
            RoundStage::Quarterfinal => rounds.quarterfinals.push(m),
            RoundStage::Semifinal => rounds.semifinals.push(m),
            RoundStage::Final => rounds.finals.push(m),
            RoundStage::Unclassified => dropped += 1,
        }
    }
    if dropped > 0 {
        log::debug!("{dropped} match(es) with unclassified rounds left out of the bracket");
    }
    rounds
}

/// Split a round into its left half (first `ceil(n/2)`) and right half (the rest).
pub fn split_halves<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

/// Which part of the tree a column or connector belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Center,
    Right,
}

/// A positioned match box; `x`/`y` are the top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBox {
    pub match_id: MatchId,
    pub x: f64,
    pub y: f64,
}

/// One round on one side of the tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub stage: RoundStage,
    pub side: Side,
    pub x: f64,
    /// Vertical space between consecutive boxes (0 for a single box).
    pub gap: f64,
    pub boxes: Vec<MatchBox>,
}

impl Column {
    fn centers(&self, match_height: f64) -> Vec<f64> {
        self.boxes.iter().map(|b| b.y + match_height / 2.0).collect()
    }
}

/// A straight line from (x1, y1) to (x2, y2).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Lines joining child boxes to their parent: a stub per child, a vertical joining
/// segment, and a stub into the parent. Right-side connectors run right to left.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub side: Side,
    pub from: RoundStage,
    pub to: RoundStage,
    pub segments: Vec<Segment>,
}

/// Match ids of one round, split into the two halves of the tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundHalves {
    pub stage: RoundStage,
    pub left: Vec<MatchId>,
    pub right: Vec<MatchId>,
}

/// Complete, positioned bracket.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketLayout {
    pub geometry: BracketGeometry,
    pub rounds: Vec<RoundHalves>,
    pub columns: Vec<Column>,
    pub connectors: Vec<Connector>,
    pub width: f64,
    pub height: f64,
}

/// Column before horizontal placement: stage, matches and box centers.
struct Placed<'a> {
    stage: RoundStage,
    side: Side,
    matches: Vec<&'a Match>,
    centers: Vec<f64>,
}

/// Lay out the knockout bracket for `matches` (arrival order decides top-to-bottom order).
pub fn layout_bracket(matches: &[Match], geometry: &BracketGeometry) -> BracketLayout {
    let rounds = derive_rounds(matches);
    let g = geometry;

    let halves: Vec<RoundHalves> = SIDE_STAGES
        .iter()
        .chain(std::iter::once(&RoundStage::Final))
        .filter(|&&stage| !rounds.stage(stage).is_empty())
        .map(|&stage| {
            let (left, right) = if stage == RoundStage::Final {
                (rounds.finals.as_slice(), &[][..])
            } else {
                split_halves(rounds.stage(stage))
            };
            RoundHalves {
                stage,
                left: left.iter().map(|m| m.id).collect(),
                right: right.iter().map(|m| m.id).collect(),
            }
        })
        .collect();

    let left = place_side(&rounds, Side::Left, g);
    let right = place_side(&rounds, Side::Right, g);
    let finals = place_finals(&rounds, &left, &right, g);

    // Left half outermost-first, the final, then the right half innermost-first.
    let mut placed: Vec<Placed<'_>> = Vec::new();
    let left_len = left.len();
    let has_final = finals.is_some();
    placed.extend(left);
    placed.extend(finals);
    let right_start = placed.len();
    placed.extend(right.into_iter().rev());

    // Shift down so that no box starts above y = 0.
    let min_center = placed
        .iter()
        .flat_map(|p| p.centers.iter().copied())
        .fold(f64::INFINITY, f64::min);
    let offset = if min_center.is_finite() {
        (g.match_height / 2.0 - min_center).max(0.0)
    } else {
        0.0
    };

    let mut columns = Vec::with_capacity(placed.len());
    let mut x = 0.0;
    for (i, p) in placed.iter().enumerate() {
        if i > 0 {
            x += g.connector_width;
        }
        let boxes: Vec<MatchBox> = p
            .matches
            .iter()
            .zip(&p.centers)
            .map(|(m, c)| MatchBox {
                match_id: m.id,
                x,
                y: c + offset - g.match_height / 2.0,
            })
            .collect();
        let gap = match p.centers.as_slice() {
            [first, second, ..] => second - first - g.match_height,
            _ => 0.0,
        };
        columns.push(Column {
            stage: p.stage,
            side: p.side,
            x,
            gap,
            boxes,
        });
        x += g.match_width;
    }

    let mut connectors = Vec::new();
    // Left half: child column i feeds parent column i + 1.
    for i in 1..left_len {
        connectors.extend(pair_connectors(Side::Left, &columns[i - 1], &columns[i], g));
    }
    // Right half is stored innermost-first: child column i + 1 feeds parent column i.
    for i in right_start..columns.len().saturating_sub(1) {
        connectors.extend(pair_connectors(Side::Right, &columns[i + 1], &columns[i], g));
    }
    if has_final {
        let final_col = &columns[left_len];
        if left_len > 0 {
            connectors.push(final_connector(Side::Left, &columns[left_len - 1], final_col, g));
        }
        if right_start < columns.len() {
            connectors.push(final_connector(Side::Right, &columns[right_start], final_col, g));
        }
    }

    let height = columns
        .iter()
        .flat_map(|c| c.boxes.iter())
        .map(|b| b.y + g.match_height)
        .fold(0.0, f64::max);

    BracketLayout {
        geometry: *g,
        rounds: halves,
        columns,
        connectors,
        width: x,
        height,
    }
}

/// Vertical centers for one half of the tree.
///
/// The outermost non-empty round is stacked with `base_gap`; every later round
/// centers box `j` on its children `2j` and `2j + 1` in the previous column.
fn place_side<'a>(rounds: &BracketRounds<'a>, side: Side, g: &BracketGeometry) -> Vec<Placed<'a>> {
    let mut placed: Vec<Placed<'a>> = Vec::new();
    for &stage in &SIDE_STAGES {
        let (left, right) = split_halves(rounds.stage(stage));
        let matches = if side == Side::Right { right } else { left };
        if matches.is_empty() {
            continue;
        }
        let centers = match placed.last() {
            None => stacked(matches.len(), g),
            Some(children) => centered_over(&children.centers, matches.len(), g),
        };
        placed.push(Placed {
            stage,
            side,
            matches: matches.to_vec(),
            centers,
        });
    }
    placed
}

/// The final column, centered between the innermost columns of both halves.
fn place_finals<'a>(
    rounds: &BracketRounds<'a>,
    left: &[Placed<'a>],
    right: &[Placed<'a>],
    g: &BracketGeometry,
) -> Option<Placed<'a>> {
    if rounds.finals.is_empty() {
        return None;
    }
    let inner: Vec<f64> = left
        .last()
        .into_iter()
        .chain(right.last())
        .flat_map(|p| p.centers.iter().copied())
        .collect();
    let mid = if inner.is_empty() {
        g.match_height / 2.0
    } else {
        let top = inner.iter().copied().fold(f64::INFINITY, f64::min);
        let bottom = inner.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (top + bottom) / 2.0
    };
    // Normally one final; extra ones are stacked around the midpoint.
    let pitch = g.match_height + g.base_gap;
    let spread = (rounds.finals.len() - 1) as f64 / 2.0;
    let centers = (0..rounds.finals.len())
        .map(|i| mid + (i as f64 - spread) * pitch)
        .collect();
    Some(Placed {
        stage: RoundStage::Final,
        side: Side::Center,
        matches: rounds.finals.clone(),
        centers,
    })
}

fn stacked(count: usize, g: &BracketGeometry) -> Vec<f64> {
    let pitch = g.match_height + g.base_gap;
    (0..count)
        .map(|i| g.match_height / 2.0 + i as f64 * pitch)
        .collect()
}

fn centered_over(children: &[f64], count: usize, g: &BracketGeometry) -> Vec<f64> {
    let pitch = g.match_height + g.base_gap;
    let mut centers: Vec<f64> = Vec::with_capacity(count);
    for j in 0..count {
        let end = (2 * j + 2).min(children.len());
        let pair = children.get(2 * j..end).unwrap_or(&[]);
        let center = if pair.is_empty() {
            // More parents than child pairs: keep stacking below.
            centers
                .last()
                .map_or(g.match_height / 2.0, |&prev| prev + pitch)
        } else {
            pair.iter().sum::<f64>() / pair.len() as f64
        };
        centers.push(center);
    }
    centers
}

/// One connector per parent box that has at least one child box.
fn pair_connectors(side: Side, child: &Column, parent: &Column, g: &BracketGeometry) -> Vec<Connector> {
    let child_ys = child.centers(g.match_height);
    parent
        .centers(g.match_height)
        .into_iter()
        .enumerate()
        .filter_map(|(j, parent_y)| {
            let end = (2 * j + 2).min(child_ys.len());
            let kids = child_ys.get(2 * j..end).filter(|k| !k.is_empty())?;
            Some(connector(side, child, kids, parent, parent_y, g))
        })
        .collect()
}

/// Connector from the innermost column of a half into the (first) final box.
fn final_connector(side: Side, child: &Column, final_col: &Column, g: &BracketGeometry) -> Connector {
    let parent_y = final_col
        .boxes
        .first()
        .map_or(g.match_height / 2.0, |b| b.y + g.match_height / 2.0);
    connector(side, child, &child.centers(g.match_height), final_col, parent_y, g)
}

fn connector(
    side: Side,
    child: &Column,
    child_ys: &[f64],
    parent: &Column,
    parent_y: f64,
    g: &BracketGeometry,
) -> Connector {
    let (child_edge, parent_edge) = match side {
        Side::Right => (child.x, parent.x + g.match_width),
        Side::Left | Side::Center => (child.x + g.match_width, parent.x),
    };
    let mid_x = (child_edge + parent_edge) / 2.0;

    let mut segments: Vec<Segment> = child_ys
        .iter()
        .map(|&y| Segment::new(child_edge, y, mid_x, y))
        .collect();
    let top = child_ys.iter().copied().fold(parent_y, f64::min);
    let bottom = child_ys.iter().copied().fold(parent_y, f64::max);
    if bottom > top {
        segments.push(Segment::new(mid_x, top, mid_x, bottom));
    }
    segments.push(Segment::new(mid_x, parent_y, parent_edge, parent_y));

    Connector {
        side,
        from: child.stage,
        to: parent.stage,
        segments,
    }
}
