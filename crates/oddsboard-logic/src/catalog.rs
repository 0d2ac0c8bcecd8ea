//! Upstream bet records and the built-in seed book.
//!
//! A [`Bet`] is the shape the data source delivers. It is mapped once into an
//! [`Odd`] with a freshly generated id; after that only the update cycle
//! touches it.
//!
//! ```
//! use oddsboard_logic::catalog::{seed_bets, Bet};
//!
//! let odds: Vec<_> = seed_bets().into_iter().map(Bet::into_odd).collect();
//! assert_eq!(odds.len(), 6);
//! assert!(odds[0].id.starts_with("winning_team_"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::constants::in_bounds;
use crate::odd::Odd;

/// A bet as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    /// Category label, becomes the odd's name.
    pub kind: String,
    pub sell_in: i32,
    pub odds: i32,
    pub image: String,
}

impl Bet {
    pub fn new(kind: impl Into<String>, sell_in: i32, odds: i32, image: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            sell_in,
            odds,
            image: image.into(),
        }
    }

    /// Convert into an [`Odd`], generating a unique id from the kind.
    pub fn into_odd(self) -> Odd {
        let id = format!("{}_{}", id_prefix(&self.kind), Uuid::new_v4());
        Odd {
            id,
            name: self.kind,
            sell_in: self.sell_in,
            odds_value: self.odds,
            image_url: Some(self.image),
        }
    }
}

/// `"Total score"` → `"total_score"`.
fn id_prefix(kind: &str) -> String {
    kind.replace(' ', "_").to_lowercase()
}

/// The default book the board starts with.
pub fn seed_bets() -> Vec<Bet> {
    vec![
        Bet::new("Winning team", 10, 20, "https://i.imgur.com/mx66SBD.jpeg"),
        Bet::new("Total score", 2, 0, "https://i.imgur.com/VnPRqcv.jpeg"),
        Bet::new("Player performance", 5, 7, "https://i.imgur.com/Urpc00H.jpeg"),
        // Seeds above the odds cap; the identity rule leaves it there.
        Bet::new("First goal scorer", 0, 80, "https://i.imgur.com/Wy94Tt7.jpeg"),
        Bet::new("Number of fouls", 5, 49, "https://i.imgur.com/NMLpcKj.jpeg"),
        Bet::new("Corner kicks", 3, 6, "https://i.imgur.com/TiJ8y5l.jpeg"),
    ]
}

/// Map a list of bets into odds, preserving order.
pub fn to_odds(bets: Vec<Bet>) -> Vec<Odd> {
    bets.into_iter().map(Bet::into_odd).collect()
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid bet list JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of bets.
pub fn parse_bets(json: &str) -> Result<Vec<Bet>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Advisory problem with an upstream bet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BetIssue {
    /// Odds outside [0, 50]; update results for this bet are not guaranteed.
    OddsOutOfRange { index: usize, odds: i32 },
    EmptyKind { index: usize },
}

/// Report bets that break the data-source contract.
///
/// Nothing downstream enforces this; callers decide what to do with it.
pub fn validate_bets(bets: &[Bet]) -> Vec<BetIssue> {
    let mut issues = Vec::new();
    for (index, bet) in bets.iter().enumerate() {
        if !in_bounds(bet.odds) {
            issues.push(BetIssue::OddsOutOfRange {
                index,
                odds: bet.odds,
            });
        }
        if bet.kind.is_empty() {
            issues.push(BetIssue::EmptyKind { index });
        }
    }
    issues
}
