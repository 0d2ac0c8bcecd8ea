//! The pre-strategy update routine: one nested conditional over name strings.
//!
//! Kept as an oracle. Tests and the simtest sweep check that
//! [`crate::processor::process`] produces exactly what this produces.
//! Do not extend it; new categories go in [`crate::rules`].

use crate::constants::labels::{FIRST_GOAL_SCORER, NUMBER_OF_FOULS, TOTAL_SCORE};
use crate::odd::Odd;

/// Run one cycle over `odds` using the original nested conditional.
pub fn process_legacy(odds: &[Odd]) -> Vec<Odd> {
    odds.iter().map(update_legacy).collect()
}

fn update_legacy(odd: &Odd) -> Odd {
    let kind = odd.name.as_str();
    let mut sell_in = odd.sell_in;
    let mut value = odd.odds_value;

    if kind != TOTAL_SCORE && kind != NUMBER_OF_FOULS {
        if value > 0 && kind != FIRST_GOAL_SCORER {
            value -= 1;
        }
    } else if value < 50 {
        value += 1;
        if kind == NUMBER_OF_FOULS {
            if sell_in < 11 && value < 50 {
                value += 1;
            }
            if sell_in < 6 && value < 50 {
                value += 1;
            }
        }
    }

    if kind != FIRST_GOAL_SCORER {
        sell_in = sell_in.saturating_sub(1);
    }

    if sell_in < 0 {
        if kind != TOTAL_SCORE {
            if kind != NUMBER_OF_FOULS {
                if value > 0 && kind != FIRST_GOAL_SCORER {
                    value -= 1;
                }
            } else {
                value -= value;
            }
        } else if value < 50 {
            value += 1;
        }
    }

    odd.with_values(sell_in, value)
}
