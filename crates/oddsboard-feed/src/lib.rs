//! Published odds list.
//!
//! Holds the board's current list in a `watch` channel, runs update cycles
//! against it one at a time, and republishes the result sorted by sell-in.
//! The update rules themselves live in `oddsboard-logic`; this crate only
//! decides when they run and who hears about it.

use std::time::Duration;

use oddsboard_logic::catalog::{to_odds, Bet};
use oddsboard_logic::processor::process;
use oddsboard_logic::Odd;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Feed settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Simulated source latency before the initial list is published.
    pub load_latency_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            load_latency_ms: 1000,
        }
    }
}

impl FeedConfig {
    pub fn load_latency(&self) -> Duration {
        Duration::from_millis(self.load_latency_ms)
    }
}

/// Sort ascending by sell-in. Stable, so equal sell-ins keep their order.
pub fn sort_by_sell_in(odds: &mut [Odd]) {
    odds.sort_by_key(|o| o.sell_in);
}

pub struct OddsFeed {
    tx: watch::Sender<Vec<Odd>>,
}

impl Default for OddsFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl OddsFeed {
    /// Empty feed; nothing is published until [`OddsFeed::load`].
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx }
    }

    /// Fetch the initial book after the configured latency and publish it.
    pub async fn load(&self, config: &FeedConfig, bets: Vec<Bet>) {
        let latency = config.load_latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        let mut odds = to_odds(bets);
        sort_by_sell_in(&mut odds);
        log::info!("Loaded {} odds", odds.len());
        self.tx.send_replace(odds);
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Odd>> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> Vec<Odd> {
        self.tx.borrow().clone()
    }

    /// Run one update cycle on the current list and republish it.
    ///
    /// The channel's write lock is held for the whole cycle, so concurrent
    /// triggers apply one after another against a stable snapshot. Returns
    /// false (and publishes nothing) when the list is empty.
    pub fn trigger_update(&self) -> bool {
        self.tx.send_if_modified(|odds| {
            if odds.is_empty() {
                log::warn!("Odds list is empty, skipping update");
                return false;
            }
            let mut updated = process(odds);
            sort_by_sell_in(&mut updated);
            *odds = updated;
            log::debug!("Published {} updated odds", odds.len());
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use oddsboard_logic::catalog::seed_bets;
    use oddsboard_logic::processor::process_cycles;

    use super::*;

    fn instant() -> FeedConfig {
        FeedConfig { load_latency_ms: 0 }
    }

    #[test]
    fn default_latency_is_one_second() {
        assert_eq!(FeedConfig::default().load_latency(), Duration::from_secs(1));
    }

    #[test]
    fn config_fills_missing_fields() {
        let config: FeedConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn sort_is_stable() {
        let mut odds = vec![
            Odd::new("a", "A", 3, 0, None),
            Odd::new("b", "B", 1, 0, None),
            Odd::new("c", "C", 3, 0, None),
        ];
        sort_by_sell_in(&mut odds);
        let ids: Vec<_> = odds.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn empty_feed_skips_update() {
        let feed = OddsFeed::new();
        let rx = feed.subscribe();
        assert!(!feed.trigger_update());
        assert!(!rx.has_changed().unwrap());
        assert!(feed.snapshot().is_empty());
    }

    #[tokio::test]
    async fn load_publishes_sorted() {
        let feed = OddsFeed::new();
        let mut rx = feed.subscribe();
        feed.load(&instant(), seed_bets()).await;

        rx.changed().await.unwrap();
        let sell_ins: Vec<_> = rx.borrow().iter().map(|o| o.sell_in).collect();
        assert_eq!(sell_ins, [0, 2, 3, 5, 5, 10]);
    }

    #[tokio::test(start_paused = true)]
    async fn load_waits_for_latency() {
        let feed = OddsFeed::new();
        let start = tokio::time::Instant::now();
        feed.load(&FeedConfig::default(), seed_bets()).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(feed.snapshot().len(), 6);
    }

    #[tokio::test]
    async fn update_processes_and_resorts() {
        let feed = OddsFeed::new();
        feed.load(&instant(), seed_bets()).await;
        let before = feed.snapshot();

        let mut rx = feed.subscribe();
        assert!(feed.trigger_update());
        assert!(rx.has_changed().unwrap());

        let after = rx.borrow_and_update().clone();
        let mut expected = process(&before);
        sort_by_sell_in(&mut expected);
        assert_eq!(after, expected);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_triggers_serialize() {
        let feed = Arc::new(OddsFeed::new());
        feed.load(&instant(), seed_bets()).await;
        let start = feed.snapshot();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let feed = Arc::clone(&feed);
                tokio::spawn(async move { feed.trigger_update() })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap());
        }

        // Tie order among equal sell-ins depends on when sorting happened.
        let mut expected = process_cycles(&start, 8);
        expected.sort_by(|a, b| a.id.cmp(&b.id));
        let mut actual = feed.snapshot();
        actual.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(actual, expected);
    }
}
