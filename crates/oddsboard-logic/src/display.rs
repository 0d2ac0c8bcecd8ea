//! Presentation rows for a list view.
//!
//! Formatting is independent of any UI toolkit. Items without a usable
//! image URL are rejected here, never in the update cycle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::odd::Odd;

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddRow {
    pub id: String,
    pub name: String,
    pub sell_in_text: String,
    pub odds_text: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("invalid image URL for {id}: {url:?} (must be non-empty and start with \"http\")")]
    InvalidImageUrl { id: String, url: Option<String> },
}

fn valid_image_url(url: Option<&str>) -> Option<&str> {
    url.filter(|u| !u.is_empty() && u.starts_with("http"))
}

/// Format a single odd for display.
pub fn to_row(odd: &Odd) -> Result<OddRow, DisplayError> {
    let image_url = valid_image_url(odd.image_url.as_deref()).ok_or_else(|| {
        DisplayError::InvalidImageUrl {
            id: odd.id.clone(),
            url: odd.image_url.clone(),
        }
    })?;

    Ok(OddRow {
        id: odd.id.clone(),
        name: odd.name.clone(),
        sell_in_text: format!("Sell In: {}", odd.sell_in),
        odds_text: format!("Odds: {}", odd.odds_value),
        image_url: image_url.to_string(),
    })
}

/// Format a list, stopping at the first invalid odd.
pub fn to_rows(odds: &[Odd]) -> Result<Vec<OddRow>, DisplayError> {
    odds.iter().map(to_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odd_with_image(image_url: Option<&str>) -> Odd {
        Odd::new("winning_team_1", "Winning team", 10, 20, image_url.map(String::from))
    }

    #[test]
    fn formats_texts() {
        let row = to_row(&odd_with_image(Some("https://i.imgur.com/mx66SBD.jpeg"))).unwrap();
        assert_eq!(row.sell_in_text, "Sell In: 10");
        assert_eq!(row.odds_text, "Odds: 20");
        assert_eq!(row.name, "Winning team");
        assert_eq!(row.id, "winning_team_1");
    }

    #[test]
    fn negative_sell_in_formats() {
        let mut odd = odd_with_image(Some("http://x"));
        odd.sell_in = -3;
        assert_eq!(to_row(&odd).unwrap().sell_in_text, "Sell In: -3");
    }

    #[test]
    fn rejects_missing_empty_or_non_http() {
        for url in [None, Some(""), Some("ftp://host/a.jpeg"), Some("imgur.com/a")] {
            let err = to_row(&odd_with_image(url)).unwrap_err();
            assert!(matches!(err, DisplayError::InvalidImageUrl { .. }), "{url:?}");
        }
    }

    #[test]
    fn to_rows_stops_at_first_error() {
        let odds = vec![odd_with_image(Some("https://ok")), odd_with_image(None)];
        assert!(to_rows(&odds).is_err());
        assert_eq!(to_rows(&odds[..1]).unwrap().len(), 1);
    }
}
