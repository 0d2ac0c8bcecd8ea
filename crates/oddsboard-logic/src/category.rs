//! Category classification — odd name to [`OddType`].
//!
//! Matching is exact and case-sensitive. `"total score"` or `"Total score "`
//! are not "Total score"; they land in [`OddType::Other`] and decay like any
//! ordinary odd.
//!
//! ```
//! use oddsboard_logic::category::{classify, OddType};
//!
//! assert_eq!(classify("Number of fouls"), OddType::NumberOfFouls);
//! assert_eq!(classify("Corner kicks"), OddType::Other("Corner kicks".into()));
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::labels;

/// Closed set of known categories plus one open catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OddType {
    TotalScore,
    NumberOfFouls,
    FirstGoalScorer,
    /// Any other name, carried verbatim.
    Other(String),
}

impl OddType {
    /// Classify a name. Total; never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            labels::TOTAL_SCORE => Self::TotalScore,
            labels::NUMBER_OF_FOULS => Self::NumberOfFouls,
            labels::FIRST_GOAL_SCORER => Self::FirstGoalScorer,
            other => Self::Other(other.to_string()),
        }
    }

    /// The name this category is displayed (and classified) under.
    pub fn display_name(&self) -> &str {
        match self {
            Self::TotalScore => labels::TOTAL_SCORE,
            Self::NumberOfFouls => labels::NUMBER_OF_FOULS,
            Self::FirstGoalScorer => labels::FIRST_GOAL_SCORER,
            Self::Other(name) => name,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

/// Classify an odd name into its category.
pub fn classify(name: &str) -> OddType {
    OddType::from_name(name)
}
