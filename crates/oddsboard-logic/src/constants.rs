//! Odds bounds, step sizes, thresholds, and category labels.
//!
//! Plain integer and string constants with no runtime dependency.
//! The rules, the legacy conditional, and the simtest harness all share these.

/// Bounds of the odds value. Every rule keeps `odds_value` inside `MIN..=MAX`.
pub mod odds {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 50;

    /// Per-cycle decay for uncategorized odds.
    pub const DECAY_STEP: i32 = 1;
    /// Per-cycle growth for "Total score" and "Number of fouls".
    pub const GROWTH_STEP: i32 = 1;
    /// Extra growth for "Number of fouls" per threshold crossed.
    pub const FOULS_BONUS_STEP: i32 = 1;
}

pub mod sell_in {
    /// Countdown decrement applied once per cycle.
    pub const STEP: i32 = 1;
    /// An odd is past due once its sell-in drops below this.
    pub const PAST_DUE_BELOW: i32 = 0;

    // "Number of fouls" bonus thresholds, compared against the pre-decrement sell-in.
    pub const FOULS_NEAR: i32 = 11;
    pub const FOULS_IMMINENT: i32 = 6;
}

/// Exact, case-sensitive names that select a non-default rule.
pub mod labels {
    pub const TOTAL_SCORE: &str = "Total score";
    pub const NUMBER_OF_FOULS: &str = "Number of fouls";
    pub const FIRST_GOAL_SCORER: &str = "First goal scorer";

    pub const ALL: [&str; 3] = [TOTAL_SCORE, NUMBER_OF_FOULS, FIRST_GOAL_SCORER];
}

/// Returns true if a sell-in of `days` is past due.
pub fn is_past_due(days: i32) -> bool {
    days < sell_in::PAST_DUE_BELOW
}

/// Returns true if `value` lies within the odds bounds.
pub fn in_bounds(value: i32) -> bool {
    (odds::MIN..=odds::MAX).contains(&value)
}
