//! Metrics for the byte-budgeted LRU cache.

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters for a [`SizedLruCache`](crate::SizedLruCache).
///
/// Adds the number of inserted entries that exceeded the whole budget on their
/// own and were evicted by the same `put` that inserted them.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedLruCacheMetrics {
    /// Counters common to all caches
    pub core: CoreCacheMetrics,
    /// Entries larger than `max_bytes` that were evicted right after insertion
    pub oversized_evictions: u64,
}

impl SizedLruCacheMetrics {
    /// Creates zeroed counters for a cache with the given byte budget.
    pub fn new(max_cache_size_bytes: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(max_cache_size_bytes),
            oversized_evictions: 0,
        }
    }

    /// Records an entry that could never fit the budget.
    pub fn record_oversized(&mut self) {
        self.oversized_evictions += 1;
    }

    /// Core counters plus the LRU-specific ones.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert(
            "oversized_evictions".to_string(),
            self.oversized_evictions as f64,
        );
        metrics
    }
}

impl CacheMetrics for SizedLruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "SizedLRU"
    }
}
