//! Round classification: free-text round labels to bracket stages, and the point table.

use crate::models::{RoundPolicy, RoundStage};

/// Points for a correct group qualifier pick.
pub const GROUP_PICK_POINTS: u32 = 5;

/// Labels that keep a "... Final" round out of the Final stage regardless of policy.
const NEVER_FINAL: [&str; 2] = ["Semi", "Quarter"];

/// Extra exclusions under [`RoundPolicy::ExcludeThirdPlace`].
const THIRD_PLACE: [&str; 2] = ["Third", "Bronze"];

/// Classify a round label (case-sensitive substring match).
///
/// Precedence, first hit wins:
/// 1. "Final" without "Semi"/"Quarter" (and without "Third"/"Bronze" under
///    `ExcludeThirdPlace`) is the Final;
/// 2. "Semi" is a Semifinal;
/// 3. "Quarter" is a Quarterfinal;
/// 4. "Round of 16".
///
/// Anything else is `Unclassified`.
pub fn classify_round(round: &str, policy: RoundPolicy) -> RoundStage {
    let excluded = |words: &[&str]| words.iter().any(|w| round.contains(w));
    let third_place_blocks = policy == RoundPolicy::ExcludeThirdPlace && excluded(&THIRD_PLACE[..]);

    if round.contains("Final") && !excluded(&NEVER_FINAL[..]) && !third_place_blocks {
        RoundStage::Final
    } else if round.contains("Semi") {
        RoundStage::Semifinal
    } else if round.contains("Quarter") {
        RoundStage::Quarterfinal
    } else if round.contains("Round of 16") {
        RoundStage::RoundOf16
    } else {
        RoundStage::Unclassified
    }
}

/// Points for correctly picking the winner of a match in `stage`.
pub fn points_for_stage(stage: RoundStage) -> u32 {
    match stage {
        RoundStage::RoundOf16 => 10,
        RoundStage::Quarterfinal => 20,
        RoundStage::Semifinal => 30,
        RoundStage::Final => 50,
        RoundStage::Unclassified => 10,
    }
}

/// Points for a round label, classified under `policy`.
pub fn points_for_round(round: &str, policy: RoundPolicy) -> u32 {
    points_for_stage(classify_round(round, policy))
}
