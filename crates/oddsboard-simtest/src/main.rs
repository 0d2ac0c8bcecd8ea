//! OddsBoard Headless Simulation Harness
//!
//! Validates update rules, the feed, and row formatting in-process.
//! No UI, no network.
//!
//! Usage:
//!   cargo run -p oddsboard-simtest
//!   cargo run -p oddsboard-simtest -- --verbose --cycles 60
//!   cargo run -p oddsboard-simtest -- --bets book.json --json

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use oddsboard_feed::{FeedConfig, OddsFeed};
use oddsboard_logic::catalog::{parse_bets, seed_bets, validate_bets, Bet};
use oddsboard_logic::constants::{in_bounds, labels};
use oddsboard_logic::display::to_rows;
use oddsboard_logic::legacy::process_legacy;
use oddsboard_logic::processor::process;
use oddsboard_logic::rules;
use oddsboard_logic::{classify, Odd};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(name = "oddsboard-simtest")]
#[command(about = "Run odds update cycles headless and check their invariants", long_about = None)]
struct Cli {
    /// Update cycles to run through the feed
    #[arg(long, default_value_t = 30)]
    cycles: u32,

    /// JSON file with a list of bets (defaults to the seed book)
    #[arg(long)]
    bets: Option<PathBuf>,

    /// Random books to cross-check against the legacy conditional
    #[arg(long, default_value_t = 200)]
    sweep: u32,

    /// Seed for the random sweep
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Simulated load latency in milliseconds
    #[arg(long, default_value_t = 0)]
    latency_ms: u64,

    /// Print every check and the per-cycle board
    #[arg(long)]
    verbose: bool,

    /// Print the final board as JSON
    #[arg(long)]
    json: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    println!("=== OddsBoard Simulation Harness ===\n");

    let bets = match &cli.bets {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_bets(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => seed_bets(),
    };

    let mut results = Vec::new();

    // 1. Upstream book
    results.extend(validate_catalog(&bets));

    // 2. Rule reference scenarios
    results.extend(validate_rules());

    // 3. Feed run
    let config = FeedConfig {
        load_latency_ms: cli.latency_ms,
    };
    let (feed_results, board) = run_feed(&config, bets, cli.cycles, cli.verbose).await;
    results.extend(feed_results);

    // 4. Legacy equivalence sweep
    results.extend(sweep_legacy(cli.seed, cli.sweep));

    // 5. Row formatting
    results.extend(validate_rows(&board, cli.verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || cli.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    }

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

// ── 1. Catalog ──────────────────────────────────────────────────────────

fn validate_catalog(bets: &[Bet]) -> Vec<TestResult> {
    println!("--- Catalog ---");
    let mut results = Vec::new();

    results.push(TestResult {
        name: "catalog_not_empty".into(),
        passed: !bets.is_empty(),
        detail: format!("{} bets loaded", bets.len()),
    });

    // Advisory only: out-of-range odds are the source's problem, not a failure.
    let issues = validate_bets(bets);
    for issue in &issues {
        println!("  note: {:?}", issue);
    }

    let known = bets
        .iter()
        .filter(|b| !classify(&b.kind).is_other())
        .count();
    results.push(TestResult {
        name: "catalog_classified".into(),
        passed: true,
        detail: format!(
            "{} special, {} regular, {} advisory issues",
            known,
            bets.len() - known,
            issues.len()
        ),
    });

    let odds: Vec<Odd> = bets.iter().cloned().map(Bet::into_odd).collect();
    let ids: HashSet<_> = odds.iter().map(|o| o.id.as_str()).collect();
    results.push(TestResult {
        name: "catalog_unique_ids".into(),
        passed: ids.len() == odds.len(),
        detail: format!("{} unique ids for {} odds", ids.len(), odds.len()),
    });

    results
}

// ── 2. Rules ────────────────────────────────────────────────────────────

fn validate_rules() -> Vec<TestResult> {
    println!("--- Update Rules ---");

    let scenarios: [(&str, (i32, i32), (i32, i32)); 9] = [
        ("Winning team", (10, 20), (9, 19)),
        ("Winning team", (-1, 20), (-2, 18)),
        ("Winning team", (10, 0), (9, 0)),
        (labels::TOTAL_SCORE, (10, 50), (9, 50)),
        (labels::TOTAL_SCORE, (-1, 49), (-2, 50)),
        (labels::NUMBER_OF_FOULS, (5, 20), (4, 23)),
        (labels::NUMBER_OF_FOULS, (11, 20), (10, 21)),
        (labels::NUMBER_OF_FOULS, (-1, 20), (-2, 0)),
        (labels::FIRST_GOAL_SCORER, (-1, 30), (-1, 30)),
    ];

    let mut results: Vec<TestResult> = scenarios
        .iter()
        .map(|&(name, (sell_in, odds), expected)| {
            let rule = rules::select_rule(&classify(name));
            let actual = rule(sell_in, odds);
            TestResult {
                name: format!(
                    "rule_{}_{}_{}",
                    name.to_lowercase().replace(' ', "_"),
                    sell_in,
                    odds
                ),
                passed: actual == expected,
                detail: format!("({sell_in}, {odds}) → {actual:?}, expected {expected:?}"),
            }
        })
        .collect();

    let batch = vec![
        Odd::new("a", "Winning team", 10, 20, None),
        Odd::new("b", labels::TOTAL_SCORE, -1, 49, None),
        Odd::new("c", labels::NUMBER_OF_FOULS, 5, 20, None),
        Odd::new("d", labels::FIRST_GOAL_SCORER, -1, 30, None),
    ];
    let out = process(&batch);
    let values: Vec<_> = out.iter().map(|o| (o.sell_in, o.odds_value)).collect();
    let ids: Vec<_> = out.iter().map(|o| o.id.as_str()).collect();
    results.push(TestResult {
        name: "rule_mixed_batch".into(),
        passed: values == [(9, 19), (-2, 50), (4, 23), (-1, 30)] && ids == ["a", "b", "c", "d"],
        detail: format!("{:?}", values),
    });

    results.push(TestResult {
        name: "rule_empty_batch".into(),
        passed: process(&[]).is_empty(),
        detail: "empty in, empty out".into(),
    });

    results
}

// ── 3. Feed ─────────────────────────────────────────────────────────────

async fn run_feed(
    config: &FeedConfig,
    bets: Vec<Bet>,
    cycles: u32,
    verbose: bool,
) -> (Vec<TestResult>, Vec<Odd>) {
    println!("--- Feed ({} cycles) ---", cycles);
    let mut results = Vec::new();

    let feed = OddsFeed::new();
    feed.load(config, bets).await;
    let initial = feed.snapshot();

    // Odds that start out of range carry no bounds guarantee.
    let tracked: HashSet<String> = initial
        .iter()
        .filter(|o| in_bounds(o.odds_value))
        .map(|o| o.id.clone())
        .collect();

    let mut bounds_violations = 0;
    let mut identity_violations = 0;
    let mut unsorted_cycles = 0;
    let mut previous = initial.clone();

    for cycle in 1..=cycles {
        feed.trigger_update();
        let board = feed.snapshot();

        if board.windows(2).any(|w| w[0].sell_in > w[1].sell_in) {
            unsorted_cycles += 1;
        }
        for odd in &board {
            if tracked.contains(&odd.id) && !in_bounds(odd.odds_value) {
                bounds_violations += 1;
            }
            let unchanged = previous
                .iter()
                .find(|p| p.id == odd.id)
                .is_some_and(|p| p.name == odd.name && p.image_url == odd.image_url);
            if !unchanged {
                identity_violations += 1;
            }
        }

        if verbose {
            println!("  cycle {:3}:", cycle);
            for odd in &board {
                println!("    {:20} sell_in={:4} odds={:3}", odd.name, odd.sell_in, odd.odds_value);
            }
        }
        previous = board;
    }

    results.push(TestResult {
        name: "feed_odds_in_bounds".into(),
        passed: bounds_violations == 0,
        detail: format!("{} out-of-range values over {} cycles", bounds_violations, cycles),
    });
    results.push(TestResult {
        name: "feed_identity_preserved".into(),
        passed: identity_violations == 0 && previous.len() == initial.len(),
        detail: format!("{} identity changes", identity_violations),
    });
    results.push(TestResult {
        name: "feed_sorted_by_sell_in".into(),
        passed: unsorted_cycles == 0,
        detail: format!("{} unsorted publications", unsorted_cycles),
    });

    let frozen = initial
        .iter()
        .filter(|o| o.name == labels::FIRST_GOAL_SCORER)
        .all(|o| previous.iter().any(|p| p == o));
    results.push(TestResult {
        name: "feed_first_goal_scorer_frozen".into(),
        passed: frozen,
        detail: "first goal scorer odds unchanged after all cycles".into(),
    });

    (results, previous)
}

// ── 4. Legacy Sweep ─────────────────────────────────────────────────────

fn random_book(rng: &mut StdRng) -> Vec<Odd> {
    const NAMES: [&str; 7] = [
        labels::TOTAL_SCORE,
        labels::NUMBER_OF_FOULS,
        labels::FIRST_GOAL_SCORER,
        "Winning team",
        "Corner kicks",
        "total score",
        "Number of fouls ",
    ];
    let len = rng.gen_range(0..12);
    (0..len)
        .map(|i| {
            let name = NAMES[rng.gen_range(0..NAMES.len())];
            Odd::new(
                format!("sweep_{i}"),
                name,
                rng.gen_range(-15..25),
                rng.gen_range(0..=50),
                None,
            )
        })
        .collect()
}

fn sweep_legacy(seed: u64, books: u32) -> Vec<TestResult> {
    println!("--- Legacy Equivalence ({} books, seed {}) ---", books, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut mismatches = 0;
    let mut compared = 0;

    for _ in 0..books {
        let mut book = random_book(&mut rng);
        let cycles = rng.gen_range(1..10);
        for _ in 0..cycles {
            let strategy = process(&book);
            let legacy = process_legacy(&book);
            compared += book.len();
            if strategy != legacy {
                mismatches += 1;
            }
            book = strategy;
        }
    }

    vec![TestResult {
        name: "legacy_equivalence".into(),
        passed: mismatches == 0,
        detail: format!("{} odd-cycles compared, {} mismatching batches", compared, mismatches),
    }]
}

// ── 5. Rows ─────────────────────────────────────────────────────────────

fn validate_rows(board: &[Odd], verbose: bool) -> Vec<TestResult> {
    println!("--- Rows ---");
    match to_rows(board) {
        Ok(rows) => {
            if verbose {
                for row in &rows {
                    println!("  {:20} {:14} {}", row.name, row.sell_in_text, row.odds_text);
                }
            }
            vec![TestResult {
                name: "rows_render".into(),
                passed: rows.len() == board.len(),
                detail: format!("{} rows rendered", rows.len()),
            }]
        }
        Err(e) => vec![TestResult {
            name: "rows_render".into(),
            passed: false,
            detail: e.to_string(),
        }],
    }
}
