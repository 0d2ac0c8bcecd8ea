//! Integration tests for the full update cycle.
//!
//! Exercises: Bet → Odd → classify → select_rule → process → OddRow
//!
//! All tests are pure logic, no feed and no runtime.

use oddsboard_logic::catalog::{seed_bets, to_odds};
use oddsboard_logic::display::to_rows;
use oddsboard_logic::processor::{process, process_cycles};
use oddsboard_logic::Odd;

// ── Helpers ────────────────────────────────────────────────────────────

fn odd(name: &str, sell_in: i32, odds_value: i32) -> Odd {
    Odd::new(
        format!("{name}-id"),
        name,
        sell_in,
        odds_value,
        Some("https://i.imgur.com/VnPRqcv.jpeg".to_string()),
    )
}

fn step(name: &str, sell_in: i32, odds_value: i32) -> (i32, i32) {
    let out = process(&[odd(name, sell_in, odds_value)]);
    assert_eq!(out.len(), 1);
    (out[0].sell_in, out[0].odds_value)
}

// ── Reference scenarios ────────────────────────────────────────────────

#[test]
fn default_category_decays() {
    assert_eq!(step("Winning team", 10, 20), (9, 19));
}

#[test]
fn default_category_past_due_decays_twice() {
    assert_eq!(step("Winning team", -1, 20), (-2, 18));
}

#[test]
fn default_category_floor() {
    assert_eq!(step("Winning team", 10, 0), (9, 0));
}

#[test]
fn total_score_cap() {
    assert_eq!(step("Total score", 10, 50), (9, 50));
}

#[test]
fn total_score_past_due_capped_on_second_increment() {
    assert_eq!(step("Total score", -1, 49), (-2, 50));
}

#[test]
fn fouls_all_bonuses_from_original_sell_in() {
    assert_eq!(step("Number of fouls", 5, 20), (4, 23));
}

#[test]
fn fouls_threshold_is_strict() {
    assert_eq!(step("Number of fouls", 11, 20), (10, 21));
}

#[test]
fn fouls_hard_reset() {
    assert_eq!(step("Number of fouls", -1, 20), (-2, 0));
}

#[test]
fn first_goal_scorer_unchanged() {
    assert_eq!(step("First goal scorer", -1, 30), (-1, 30));
}

#[test]
fn four_category_batch() {
    let input = vec![
        odd("Winning team", 10, 20),
        odd("Total score", 10, 50),
        odd("Number of fouls", 5, 20),
        odd("First goal scorer", -1, 30),
    ];
    let out = process(&input);

    assert_eq!(out.len(), 4);
    let names: Vec<_> = out.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        ["Winning team", "Total score", "Number of fouls", "First goal scorer"]
    );
    let values: Vec<_> = out.iter().map(|o| (o.sell_in, o.odds_value)).collect();
    assert_eq!(values, [(9, 19), (9, 50), (4, 23), (-1, 30)]);
}

// ── Multi-cycle invariants ─────────────────────────────────────────────

#[test]
fn seed_book_over_many_cycles() {
    let start = to_odds(seed_bets());
    let mut current = start.clone();

    for cycle in 0..60 {
        let next = process(&current);
        assert_eq!(next.len(), current.len());
        for (before, after) in current.iter().zip(&next) {
            assert_eq!(before.id, after.id, "cycle {cycle}");
            assert_eq!(before.name, after.name);
            assert_eq!(before.image_url, after.image_url);
            if before.name != "First goal scorer" {
                assert!(
                    (0..=50).contains(&after.odds_value),
                    "{} out of bounds at cycle {cycle}: {}",
                    after.name,
                    after.odds_value
                );
            }
        }
        current = next;
    }

    // First goal scorer seeds at 80 and is never touched.
    let fgs = current.iter().find(|o| o.name == "First goal scorer").unwrap();
    assert_eq!((fgs.sell_in, fgs.odds_value), (0, 80));
}

#[test]
fn seed_book_known_trajectory() {
    let after = process_cycles(&to_odds(seed_bets()), 3);
    let values: Vec<_> = after.iter().map(|o| (o.sell_in, o.odds_value)).collect();
    assert_eq!(
        values,
        [
            (7, 17), // Winning team
            (-1, 4), // Total score: +1, +1, +2
            (2, 4),  // Player performance
            (0, 80), // First goal scorer
            (2, 50), // Number of fouls
            (0, 3),  // Corner kicks
        ]
    );
}

#[test]
fn updated_book_renders() {
    let rows = to_rows(&process(&to_odds(seed_bets()))).unwrap();
    assert_eq!(rows[0].sell_in_text, "Sell In: 9");
    assert_eq!(rows[0].odds_text, "Odds: 19");
}
