//! Pure odds update logic for OddsBoard.
//!
//! Every function here takes plain data and returns plain data: no I/O, no
//! clocks, no shared state. One update cycle is [`processor::process`]; the
//! caller owns the list, decides when to run it, and re-sorts the result.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Upstream bet records, seed book, id generation |
//! | [`category`] | Name → category classification (exact match) |
//! | [`constants`] | Odds bounds, step sizes, thresholds, labels |
//! | [`display`] | Row formatting and image-URL validation |
//! | [`legacy`] | Original nested conditional, kept as an equivalence oracle |
//! | [`odd`] | The item updated each cycle |
//! | [`processor`] | Batch update cycle |
//! | [`rules`] | Per-category update rules and rule selection |

pub mod catalog;
pub mod category;
pub mod constants;
pub mod display;
pub mod legacy;
pub mod odd;
pub mod processor;
pub mod rules;

pub use category::{classify, OddType};
pub use odd::Odd;
pub use processor::process;
