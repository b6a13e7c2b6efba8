//! Frontier traversal engine.
//!
//! Drives the fetch → extract → filter → enqueue loop from a single seed
//! appid, breadth-first or in random-pop order, until the fetch-call budget
//! is spent or the frontier drains. All traversal state is instance-owned:
//! multiple independent scans can run in one process.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use similarscan_shared::{AppId, GameItem, ScanConfig, TraversalMode};

use crate::extract;
use crate::fetch::PageFetcher;

// ---------------------------------------------------------------------------
// StopReason / ScanOutcome
// ---------------------------------------------------------------------------

/// Why a scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The fetch-call budget reached zero.
    BudgetExhausted,
    /// The frontier drained before the budget did.
    FrontierExhausted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetExhausted => write!(f, "reached the fetch-call budget"),
            Self::FrontierExhausted => write!(f, "frontier exhausted"),
        }
    }
}

/// Summary of a finished scan.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Accepted games in discovery order.
    pub games: Vec<GameItem>,
    /// Fetch calls consumed, failures included.
    pub calls: u32,
    /// Appids seen (fetched or enqueued), seed included.
    pub visited: usize,
    /// Appids still queued when the scan stopped.
    pub queued: usize,
    /// Why the scan stopped.
    pub stop: StopReason,
}

// ---------------------------------------------------------------------------
// ScanObserver
// ---------------------------------------------------------------------------

/// Progress callbacks for reporting scan status.
pub trait ScanObserver {
    /// Called after each page visit with per-page and running totals.
    fn page_scanned(&self, appid: AppId, depth: u32, found: usize, kept: usize, total: usize);
    /// Called once when the scan stops.
    fn done(&self, outcome: &ScanOutcome);
}

/// No-op observer for headless/test usage.
pub struct SilentObserver;

impl ScanObserver for SilentObserver {
    fn page_scanned(&self, _appid: AppId, _depth: u32, _found: usize, _kept: usize, _total: usize) {
    }
    fn done(&self, _outcome: &ScanOutcome) {}
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Budgeted traversal over the recommendation graph.
pub struct Scanner<F> {
    config: ScanConfig,
    fetcher: F,
    rng: StdRng,
    frontier: VecDeque<(AppId, u32)>,
    visited: HashSet<AppId>,
    games: Vec<GameItem>,
    calls: u32,
}

impl<F: PageFetcher> Scanner<F> {
    /// Create a scanner seeded with one appid at depth 0.
    pub fn new(seed: AppId, config: ScanConfig, fetcher: F) -> Self {
        Self::with_rng(seed, config, fetcher, StdRng::from_os_rng())
    }

    /// Same as [`Scanner::new`] but with a caller-provided RNG, so
    /// random-mode pop order is reproducible in tests.
    pub fn with_rng(seed: AppId, config: ScanConfig, fetcher: F, rng: StdRng) -> Self {
        let mut visited = HashSet::new();
        visited.insert(seed);

        Self {
            config,
            fetcher,
            rng,
            frontier: VecDeque::from([(seed, 0)]),
            visited,
            games: Vec::new(),
            calls: 0,
        }
    }

    /// Run the traversal to completion.
    ///
    /// Per-page fetch and parse failures are absorbed here: a failed page
    /// counts against the call budget and yields zero items, nothing more.
    #[instrument(skip_all, fields(max_calls = self.config.max_calls, mode = ?self.config.mode))]
    pub async fn run(mut self, observer: &dyn ScanObserver) -> ScanOutcome {
        info!(
            max_calls = self.config.max_calls,
            max_games = self.config.max_games,
            mode = ?self.config.mode,
            "starting scan"
        );

        let stop = loop {
            if self.calls >= self.config.max_calls {
                break StopReason::BudgetExhausted;
            }
            let Some((appid, depth)) = self.pop_next() else {
                break StopReason::FrontierExhausted;
            };
            self.visit(appid, depth, observer).await;
        };

        let outcome = ScanOutcome {
            games: self.games,
            calls: self.calls,
            visited: self.visited.len(),
            queued: self.frontier.len(),
            stop,
        };

        info!(
            accepted = outcome.games.len(),
            calls = outcome.calls,
            visited = outcome.visited,
            queued = outcome.queued,
            stop = %outcome.stop,
            "scan finished"
        );
        observer.done(&outcome);
        outcome
    }

    /// Remove one pending node. FIFO pops the oldest entry; random mode
    /// pops a uniformly-chosen one, keeping the rest in relative order.
    fn pop_next(&mut self) -> Option<(AppId, u32)> {
        match self.config.mode {
            TraversalMode::Fifo => self.frontier.pop_front(),
            TraversalMode::Random => {
                if self.frontier.is_empty() {
                    return None;
                }
                let idx = self.rng.random_range(0..self.frontier.len());
                self.frontier.remove(idx)
            }
        }
    }

    /// Fetch one page and fold its items into the scan state.
    async fn visit(&mut self, appid: AppId, depth: u32, observer: &dyn ScanObserver) {
        debug!(%appid, depth, "visiting node");
        self.calls += 1;

        let body = match self.fetcher.fetch(appid).await {
            Ok(body) => body,
            Err(e) => {
                warn!(%appid, error = %e, "fetch failed, skipping page");
                String::new()
            }
        };

        let found = extract::similar_items(&body, depth + 1);
        let found_count = found.len();
        let mut kept = 0;

        for item in found {
            // Enqueue regardless of category: filtering governs what is
            // reported, not what is traversed. A full report halts frontier
            // growth unless enqueue_after_full keeps it open.
            if let Some(id) = item.appid {
                if !self.visited.contains(&id)
                    && (self.results_open() || self.config.enqueue_after_full)
                {
                    self.visited.insert(id);
                    self.frontier.push_back((id, depth + 1));
                }
            }

            if self.results_open() && self.config.categories.contains(&item.category) {
                self.games.push(item);
                kept += 1;
            }
        }

        debug!(%appid, found = found_count, kept, total = self.games.len(), "page folded");
        observer.page_scanned(appid, depth, found_count, kept, self.games.len());
    }

    /// Whether the accepted-game budget still has room.
    fn results_open(&self) -> bool {
        (self.games.len() as u32) < self.config.max_games
    }
}
