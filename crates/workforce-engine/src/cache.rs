//! Version-stamped cache of per-category historical statistics.
//!
//! Uses `moka::sync::Cache`. Keys embed the aggregated series' content
//! version, so statistics computed against an older series can never be
//! served after a reload. Tracks hits/misses.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use moka::sync::Cache;

use workforce_core::types::HistoricalStats;

/// Maximum cached categories.
const MAX_ENTRIES: u64 = 1_024;

/// Thread-safe stats cache keyed by `category@series_version`.
pub struct StatsCache {
    cache: Cache<String, Arc<HistoricalStats>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StatsCache {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().max_capacity(MAX_ENTRIES).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cache key for a category under a given series version.
    pub fn key(category: &str, series_version: u64) -> String {
        format!("{category}@{series_version:016x}")
    }

    pub fn get(&self, category: &str, series_version: u64) -> Option<Arc<HistoricalStats>> {
        match self.cache.get(&Self::key(category, series_version)) {
            Some(v) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(v)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, category: &str, series_version: u64, stats: Arc<HistoricalStats>) {
        self.cache.insert(Self::key(category, series_version), stats);
    }

    /// Invalidate all entries (on data reload).
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Total cache hits.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total cache misses.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let m = self.misses() as f64;
        let total = h + m;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }

    /// Number of entries currently in the cache.
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}
