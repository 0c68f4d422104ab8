//! Byte-Budgeted Least Recently Used (LRU) Cache
//!
//! This module provides an LRU cache whose capacity is a cumulative byte budget
//! rather than an entry count. Every resident entry is charged
//! `key.byte_size() + value.byte_size()`; when an insertion or update pushes the
//! total over the budget, least recently used entries are evicted until it fits.
//!
//! # Algorithm
//!
//! Entries live in a doubly linked list ordered by recency (front = most recently
//! used, back = least recently used) and a hash map from key to list node. A lookup
//! finds the node through the map and relinks it at the front; eviction always
//! pops the current back of the list, re-reading it after every removal.
//!
//! ```text
//!   map: key ──▶ node index
//!
//!   front (MRU)                                  back (LRU)
//!   ┌──────┐    ┌──────┐    ┌──────┐    ┌──────┐
//!   │  c   │◀──▶│  a   │◀──▶│  d   │◀──▶│  b   │ ──▶ evicted first
//!   └──────┘    └──────┘    └──────┘    └──────┘
//! ```
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1) amortized, plus O(k) for k evictions it triggers
//!   - Remove oldest: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) in the number of resident entries
//!   - Per-entry overhead: one map slot, two list links and the recorded charge
//!
//! # Eviction Callback
//!
//! An optional callback receives ownership of each evicted key and value,
//! synchronously, after the entry is gone from both structures and the size counter
//! has been decremented. Replacing a value with `put` or taking it out with
//! [`SizedLruCache::remove`] is not an eviction and does not run the callback.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. Wrap it in a `Mutex` (holding the lock
//! for the whole call) or shard keys across several independently locked instances.
//! The callback runs while the cache is mutably borrowed, so it cannot call back
//! into the same instance; doing so through an outer lock deadlocks.

use crate::config::SizedLruCacheConfig;
use crate::entry::{charge, CacheEntry};
use crate::list::{self, List, NodeId};
use crate::metrics::{CacheMetrics, SizedLruCacheMetrics};
use crate::size::ByteSize;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::{DefaultHashBuilder, HashMap};

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Callback invoked with each evicted key and value.
pub type EvictCallback<K, V> = Box<dyn FnMut(K, V) + Send>;

/// A least recently used cache bounded by the total byte size of its entries.
///
/// # Examples
///
/// ```
/// use sized_lru::SizedLruCache;
///
/// // Every entry costs key bytes + value bytes; budget of 10
/// let mut cache = SizedLruCache::new(10);
///
/// cache.put("a", "1234"); // 5 bytes
/// cache.put("b", "1234"); // 5 bytes, total 10
/// assert_eq!(cache.len(), 2);
///
/// // Touching "a" makes "b" the least recently used entry
/// assert_eq!(cache.get("a"), Some(&"1234"));
///
/// cache.put("c", "12"); // 3 bytes would make 13, so "b" goes
/// assert_eq!(cache.get("b"), None);
/// assert_eq!(cache.size_bytes(), 8);
/// ```
pub struct SizedLruCache<K, V, S = DefaultHashBuilder> {
    config: SizedLruCacheConfig,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, NodeId, S>,
    size_bytes: u64,
    on_evict: Option<EvictCallback<K, V>>,
    metrics: SizedLruCacheMetrics,
}

impl<K: Hash + Eq, V> SizedLruCache<K, V, DefaultHashBuilder> {
    /// Creates a cache holding at most `max_bytes` of keys and values.
    ///
    /// A budget of `0` disables size-driven eviction.
    pub fn new(max_bytes: u64) -> Self {
        Self::init(SizedLruCacheConfig { max_bytes }, None)
    }

    /// Creates a cache that hands every evicted entry to `on_evict`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_lru::SizedLruCache;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let evicted = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&evicted);
    /// let mut cache: SizedLruCache<&str, &str> =
    ///     SizedLruCache::with_evict_callback(4, move |k, _v| {
    ///         sink.lock().unwrap().push(k);
    ///     });
    ///
    /// cache.put("a", "x");
    /// cache.put("b", "x");
    /// cache.put("c", "x");
    /// assert_eq!(*evicted.lock().unwrap(), vec!["a"]);
    /// ```
    pub fn with_evict_callback<F>(max_bytes: u64, on_evict: F) -> Self
    where
        F: FnMut(K, V) + Send + 'static,
    {
        let mut cache = Self::new(max_bytes);
        cache.set_evict_callback(on_evict);
        cache
    }

    /// Creates a cache from a configuration, optionally with a seeded hash builder.
    pub fn init(config: SizedLruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> SizedLruCache<K, V, S> {
    /// Creates a cache from a configuration with a custom hash builder.
    pub fn init_with_hasher(config: SizedLruCacheConfig, hash_builder: S) -> Self {
        SizedLruCache {
            config,
            list: List::new(),
            map: HashMap::with_hasher(hash_builder),
            size_bytes: 0,
            on_evict: None,
            metrics: SizedLruCacheMetrics::new(config.max_bytes),
        }
    }

    /// Installs the eviction callback, replacing any previous one.
    pub fn set_evict_callback<F>(&mut self, on_evict: F)
    where
        F: FnMut(K, V) + Send + 'static,
    {
        self.on_evict = Some(Box::new(on_evict));
    }

    /// Number of resident entries (not bytes).
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no entries are resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Bytes currently charged to resident entries.
    #[inline]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// The configured budget; `0` means unbounded.
    #[inline]
    pub fn max_bytes(&self) -> u64 {
        self.config.max_bytes
    }

    /// Looks up `key` and marks it as the most recently used entry.
    ///
    /// A miss has no side effects. A hit never evicts and never changes the
    /// size counter.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = *self.map.get(key)?;
        self.list.move_to_front(node);
        let entry = self.list.get_value(node)?;
        self.metrics.core.record_hit(entry.size);
        Some(&entry.value)
    }

    /// Looks up `key` without touching its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = *self.map.get(key)?;
        self.list.get_value(node).map(|entry| &entry.value)
    }

    /// Returns true if `key` is resident. Does not touch its recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Records a lookup the caller resolved elsewhere, for hit-rate reporting.
    #[inline]
    pub fn record_miss(&mut self, object_size: u64) {
        self.metrics.core.record_miss(object_size);
    }

    /// Evicts the least recently used entry, if any.
    ///
    /// The entry is unlinked, its charge released and the eviction callback run,
    /// exactly as for budget-driven eviction. Returns false on an empty cache.
    pub fn remove_oldest(&mut self) -> bool {
        let entry = match self.list.remove_last() {
            Some(entry) => entry,
            None => return false,
        };
        self.map.remove(&entry.key);
        debug_assert!(self.size_bytes >= entry.size);
        self.size_bytes = self.size_bytes.saturating_sub(entry.size);
        self.metrics.core.record_eviction(entry.size);
        trace!(
            entry_bytes = entry.size,
            resident_bytes = self.size_bytes,
            resident_entries = self.map.len(),
            "evicted least recently used entry"
        );

        if let Some(on_evict) = self.on_evict.as_mut() {
            let (key, value) = entry.into_parts();
            on_evict(key, value);
        }
        true
    }

    /// Takes `key` out of the cache and returns its value.
    ///
    /// This is not an eviction: the callback is not invoked.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        let entry = self.list.remove(node)?;
        self.size_bytes = self.size_bytes.saturating_sub(entry.size);
        self.metrics.core.record_removal(entry.size);
        Some(entry.value)
    }

    /// Drops every entry without invoking the eviction callback.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
        self.size_bytes = 0;
        self.metrics.core.record_clear();
    }

    /// Iterates entries from most to least recently used without promoting them.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    fn evict_to_budget(&mut self) {
        if self.config.is_unbounded() {
            return;
        }
        while self.size_bytes > self.config.max_bytes {
            if !self.remove_oldest() {
                break;
            }
        }
    }
}

impl<K: Hash + Eq + Clone + ByteSize, V: ByteSize, S: BuildHasher> SizedLruCache<K, V, S> {
    /// Inserts or replaces `key`, then evicts until the budget holds.
    ///
    /// For a resident key the value is swapped in place, the size counter moves by
    /// the difference between the new and old charge, the entry becomes most
    /// recently used and the previous value is returned. The eviction callback is
    /// not run for the replaced value.
    ///
    /// If the entry alone is larger than the budget it is still inserted and then
    /// evicted along with everything else, leaving the cache empty.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut replaced = None;
        let new_size;

        if let Some(&node) = self.map.get(&key) {
            // Every map handle points at an occupied list slot
            debug_assert!(
                self.list.get_value(node).is_some(),
                "cache map and recency list out of sync"
            );
            let entry = self.list.get_value_mut(node)?;
            let old_size = entry.size;
            new_size = charge(&entry.key, &value);
            replaced = Some(entry.replace(value, new_size));
            self.list.move_to_front(node);
            self.size_bytes = self.size_bytes.saturating_sub(old_size) + new_size;
            self.metrics.core.record_replacement(old_size, new_size);
        } else {
            new_size = charge(&key, &value);
            let node = self.list.add(CacheEntry::new(key.clone(), value, new_size));
            self.map.insert(key, node);
            self.size_bytes += new_size;
            self.metrics.core.record_insertion(new_size);
        }

        if !self.config.is_unbounded() && new_size > self.config.max_bytes {
            self.metrics.record_oversized();
            debug!(
                entry_bytes = new_size,
                max_bytes = self.config.max_bytes,
                "entry exceeds the cache budget on its own"
            );
        }

        self.evict_to_budget();
        replaced
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for SizedLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for SizedLruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedLruCache")
            .field("max_bytes", &self.config.max_bytes)
            .field("size_bytes", &self.size_bytes)
            .field("len", &self.list.len())
            .field("has_evict_callback", &self.on_evict.is_some())
            .finish()
    }
}

/// Iterator over cache entries from most to least recently used.
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, CacheEntry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
