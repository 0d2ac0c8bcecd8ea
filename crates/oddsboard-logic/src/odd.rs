//! The tradable item carried through every update cycle.

use serde::{Deserialize, Serialize};

/// A single odd on the board.
///
/// Only `sell_in` and `odds_value` change between cycles; the update
/// functions copy every other field through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Odd {
    /// Opaque unique identifier, assigned once by the data source.
    pub id: String,
    /// Display name; also the classification key.
    pub name: String,
    /// Cycles remaining before the odd is past due. May go negative.
    pub sell_in: i32,
    /// Current odds, kept within [0, 50].
    pub odds_value: i32,
    pub image_url: Option<String>,
}

impl Odd {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sell_in: i32,
        odds_value: i32,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sell_in,
            odds_value,
            image_url,
        }
    }

    /// Copy of this odd with new sell-in and odds, identity fields kept.
    pub fn with_values(&self, sell_in: i32, odds_value: i32) -> Self {
        Self {
            sell_in,
            odds_value,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_values_keeps_identity() {
        let odd = Odd::new("a_1", "Corner kicks", 3, 6, Some("https://x/y.jpeg".into()));
        let next = odd.with_values(2, 5);
        assert_eq!(next.id, odd.id);
        assert_eq!(next.name, odd.name);
        assert_eq!(next.image_url, odd.image_url);
        assert_eq!((next.sell_in, next.odds_value), (2, 5));
    }

    #[test]
    fn serde_field_names() {
        let odd = Odd::new("id", "n", 1, 2, None);
        let json = serde_json::to_value(&odd).unwrap();
        assert_eq!(json["sell_in"], 1);
        assert_eq!(json["odds_value"], 2);
        assert!(json["image_url"].is_null());
    }
}
