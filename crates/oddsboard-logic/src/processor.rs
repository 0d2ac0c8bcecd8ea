//! Batch processing: one update cycle over an ordered list of odds.
//!
//! Output has the same length and order as the input. Sorting is left to
//! the caller.

use crate::category::classify;
use crate::odd::Odd;
use crate::rules::select_rule;

/// Advance a single odd by one cycle.
///
/// The category is re-derived from the name on every call.
pub fn update_odd(odd: &Odd) -> Odd {
    let rule = select_rule(&classify(&odd.name));
    let (sell_in, odds_value) = rule(odd.sell_in, odd.odds_value);
    odd.with_values(sell_in, odds_value)
}

/// Advance every odd by one cycle, returning new values.
pub fn process(odds: &[Odd]) -> Vec<Odd> {
    log::trace!("processing {} odds", odds.len());
    odds.iter().map(update_odd).collect()
}

/// Apply [`process`] `cycles` times in a row.
pub fn process_cycles(odds: &[Odd], cycles: u32) -> Vec<Odd> {
    let mut current = odds.to_vec();
    for _ in 0..cycles {
        current = process(&current);
    }
    current
}
