//! Per-category update rules and the rule selector.
//!
//! Each rule is a plain function from the current `(sell_in, odds)` pair to
//! the next one. None of them can fail or leave the odds bounds, provided the
//! input odds already lie within [0, 50].
//!
//! | Category | Before due | Past due |
//! |----------|-----------|----------|
//! | other | −1 | −2 |
//! | Total score | +1 | +2 |
//! | Number of fouls | +1 / +2 (<11) / +3 (<6) | reset to 0 |
//! | First goal scorer | unchanged | unchanged |
//!
//! All steps are clamped by the 0/50 bounds. The countdown saturates at
//! `i32::MIN` rather than wrapping.

use crate::category::OddType;
use crate::constants::{is_past_due, odds, sell_in};

/// One cycle of a category: `(sell_in, odds) -> (sell_in, odds)`.
pub type UpdateRule = fn(i32, i32) -> (i32, i32);

/// Default rule: decay by one per cycle, by two once past due, floored at 0.
pub fn regular(mut days: i32, mut value: i32) -> (i32, i32) {
    if value > odds::MIN {
        value -= odds::DECAY_STEP;
    }
    days = days.saturating_sub(sell_in::STEP);
    if is_past_due(days) && value > odds::MIN {
        value -= odds::DECAY_STEP;
    }
    (days, value)
}

/// "Total score": the mirror of [`regular`], capped at 50.
pub fn total_score(mut days: i32, mut value: i32) -> (i32, i32) {
    if value < odds::MAX {
        value += odds::GROWTH_STEP;
    }
    days = days.saturating_sub(sell_in::STEP);
    if is_past_due(days) && value < odds::MAX {
        value += odds::GROWTH_STEP;
    }
    (days, value)
}

/// "Number of fouls": grows faster as the deadline nears, collapses to zero
/// once past due.
///
/// Both bonus thresholds compare against the sell-in *before* this cycle's
/// decrement.
pub fn number_of_fouls(days: i32, mut value: i32) -> (i32, i32) {
    let original = days;
    if value < odds::MAX {
        value += odds::GROWTH_STEP;
    }
    if original < sell_in::FOULS_NEAR && value < odds::MAX {
        value += odds::FOULS_BONUS_STEP;
    }
    if original < sell_in::FOULS_IMMINENT && value < odds::MAX {
        value += odds::FOULS_BONUS_STEP;
    }
    let days = original.saturating_sub(sell_in::STEP);
    if is_past_due(days) {
        value = odds::MIN;
    }
    (days, value)
}

/// "First goal scorer": never changes, not even the countdown.
pub fn first_goal_scorer(days: i32, value: i32) -> (i32, i32) {
    (days, value)
}

/// Pick the rule for a category. `Other` falls back to [`regular`].
pub fn select_rule(kind: &OddType) -> UpdateRule {
    match kind {
        OddType::TotalScore => total_score,
        OddType::NumberOfFouls => number_of_fouls,
        OddType::FirstGoalScorer => first_goal_scorer,
        OddType::Other(_) => regular,
    }
}
