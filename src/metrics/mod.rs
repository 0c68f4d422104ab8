//! Cache Metrics
//!
//! Counters kept alongside the cache so an embedding service can export hit
//! rates, eviction pressure and budget utilization. Reports are returned as a
//! `BTreeMap<String, f64>` so keys always come out in the same order, which keeps
//! logs and test assertions stable.
//!
//! Metrics are bookkeeping only: they never influence eviction decisions.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::SizedLruCacheMetrics;

/// Counters shared by every cache report.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CoreCacheMetrics {
    /// Lookups seen by the cache: hits plus misses reported through `record_miss`.
    pub requests: u64,

    /// Lookups that found their key.
    pub cache_hits: u64,

    /// Bytes asked for across hits and reported misses.
    pub total_bytes_requested: u64,

    /// Bytes returned from resident entries.
    pub bytes_served_from_cache: u64,

    /// Bytes charged by insertions and replacements.
    pub bytes_written_to_cache: u64,

    /// Entries dropped by the budget loop or `remove_oldest`.
    pub evictions: u64,

    /// Entries taken out through explicit `remove`.
    pub removals: u64,

    /// Bytes currently charged to resident entries.
    pub cache_size_bytes: u64,

    /// Configured byte budget; `0` when unbounded.
    pub max_cache_size_bytes: u64,
}

impl CoreCacheMetrics {
    /// Creates zeroed counters for a cache with the given budget.
    pub fn new(max_cache_size_bytes: u64) -> Self {
        Self {
            max_cache_size_bytes,
            ..Default::default()
        }
    }

    /// Records a lookup that found an entry charged `object_size` bytes.
    pub fn record_hit(&mut self, object_size: u64) {
        self.requests += 1;
        self.cache_hits += 1;
        self.total_bytes_requested += object_size;
        self.bytes_served_from_cache += object_size;
    }

    /// Records a lookup for an object of `object_size` bytes that was not resident.
    ///
    /// Misses are counted as `requests - cache_hits`.
    pub fn record_miss(&mut self, object_size: u64) {
        self.requests += 1;
        self.total_bytes_requested += object_size;
    }

    /// Records a new entry charged `object_size` bytes.
    pub fn record_insertion(&mut self, object_size: u64) {
        self.cache_size_bytes += object_size;
        self.bytes_written_to_cache += object_size;
    }

    /// Records an in-place value replacement that changed the entry's charge.
    pub fn record_replacement(&mut self, old_size: u64, new_size: u64) {
        self.cache_size_bytes = self.cache_size_bytes.saturating_sub(old_size) + new_size;
        self.bytes_written_to_cache += new_size;
    }

    /// Records an entry leaving through eviction.
    pub fn record_eviction(&mut self, evicted_size: u64) {
        self.evictions += 1;
        self.cache_size_bytes = self.cache_size_bytes.saturating_sub(evicted_size);
    }

    /// Records an entry leaving through explicit removal.
    pub fn record_removal(&mut self, removed_size: u64) {
        self.removals += 1;
        self.cache_size_bytes = self.cache_size_bytes.saturating_sub(removed_size);
    }

    /// Resets the resident size after the cache was emptied wholesale.
    pub fn record_clear(&mut self) {
        self.cache_size_bytes = 0;
    }

    /// Fraction of requests that were hits, `0.0` before the first request.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of requests that were misses, `0.0` before the first request.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of requested bytes that were served from resident entries.
    pub fn byte_hit_rate(&self) -> f64 {
        if self.total_bytes_requested > 0 {
            self.bytes_served_from_cache as f64 / self.total_bytes_requested as f64
        } else {
            0.0
        }
    }

    /// Resident bytes over the budget; `0.0` for an unbounded cache.
    pub fn cache_utilization(&self) -> f64 {
        if self.max_cache_size_bytes > 0 {
            self.cache_size_bytes as f64 / self.max_cache_size_bytes as f64
        } else {
            0.0
        }
    }

    /// Flattens the counters and derived rates into a report.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        metrics.insert("byte_hit_rate".to_string(), self.byte_hit_rate());

        metrics.insert(
            "total_bytes_requested".to_string(),
            self.total_bytes_requested as f64,
        );
        metrics.insert(
            "bytes_served_from_cache".to_string(),
            self.bytes_served_from_cache as f64,
        );
        metrics.insert(
            "bytes_written_to_cache".to_string(),
            self.bytes_written_to_cache as f64,
        );

        metrics.insert("cache_size_bytes".to_string(), self.cache_size_bytes as f64);
        metrics.insert(
            "max_cache_size_bytes".to_string(),
            self.max_cache_size_bytes as f64,
        );
        metrics.insert("cache_utilization".to_string(), self.cache_utilization());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics access for cache implementations.
pub trait CacheMetrics {
    /// Returns every metric as a name/value pair, sorted by name.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short identifier of the eviction policy, e.g. `"SizedLRU"`.
    fn algorithm_name(&self) -> &'static str;
}
