//! Property-Based Tests for the Byte-Budgeted LRU Cache
//!
//! Runs random operation sequences against the cache and a naive reference model
//! (a recency-ordered `Vec`), checking after every step that:
//! - the map and the recency list hold the same keys, and `len()` matches both
//! - the size counter equals the sum of key and value sizes of resident entries
//! - a bounded cache is within budget after every `put` unless it is empty
//! - evictions happen in exactly the order the model predicts
//! - replacing a value never reports the old value as evicted

use proptest::prelude::*;
use sized_lru::SizedLruCache;
use std::sync::{Arc, Mutex};

// == Test Configuration ==
const KEY_SPACE: &str = "[a-h]{1,3}";
const MAX_VALUE_LEN: usize = 24;

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, len: usize },
    Get { key: String },
    Remove { key: String },
    RemoveOldest,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (KEY_SPACE, 0..=MAX_VALUE_LEN).prop_map(|(key, len)| CacheOp::Put { key, len }),
        3 => KEY_SPACE.prop_map(|key| CacheOp::Get { key }),
        1 => KEY_SPACE.prop_map(|key| CacheOp::Remove { key }),
        1 => Just(CacheOp::RemoveOldest),
    ]
}

/// Recency-ordered reference: index 0 is the most recently used entry.
#[derive(Default)]
struct Model {
    max_bytes: u64,
    entries: Vec<(String, usize)>,
    evicted: Vec<(String, usize)>,
}

impl Model {
    fn charge(key: &str, len: usize) -> u64 {
        (key.len() + len) as u64
    }

    fn size(&self) -> u64 {
        self.entries.iter().map(|(k, l)| Self::charge(k, *l)).sum()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn evict_oldest(&mut self) {
        if let Some(entry) = self.entries.pop() {
            self.evicted.push(entry);
        }
    }

    fn apply(&mut self, op: &CacheOp) {
        match op {
            CacheOp::Put { key, len } => {
                if let Some(pos) = self.position(key) {
                    self.entries.remove(pos);
                }
                self.entries.insert(0, (key.clone(), *len));
                while self.max_bytes > 0 && self.size() > self.max_bytes {
                    self.evict_oldest();
                }
            }
            CacheOp::Get { key } => {
                if let Some(pos) = self.position(key) {
                    let entry = self.entries.remove(pos);
                    self.entries.insert(0, entry);
                }
            }
            CacheOp::Remove { key } => {
                if let Some(pos) = self.position(key) {
                    self.entries.remove(pos);
                }
            }
            CacheOp::RemoveOldest => self.evict_oldest(),
        }
    }
}

type Evicted = Arc<Mutex<Vec<(String, usize)>>>;

fn recording_cache(max_bytes: u64) -> (SizedLruCache<String, Vec<u8>>, Evicted) {
    let evicted: Evicted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&evicted);
    let cache = SizedLruCache::with_evict_callback(max_bytes, move |k: String, v: Vec<u8>| {
        sink.lock().unwrap().push((k, v.len()));
    });
    (cache, evicted)
}

fn apply(cache: &mut SizedLruCache<String, Vec<u8>>, op: &CacheOp) {
    match op {
        CacheOp::Put { key, len } => {
            cache.put(key.clone(), vec![0u8; *len]);
        }
        CacheOp::Get { key } => {
            let _ = cache.get(key.as_str());
        }
        CacheOp::Remove { key } => {
            let _ = cache.remove(key.as_str());
        }
        CacheOp::RemoveOldest => {
            cache.remove_oldest();
        }
    }
}

fn check_invariants(
    cache: &SizedLruCache<String, Vec<u8>>,
    model: &Model,
) -> Result<(), TestCaseError> {
    let listed: Vec<(String, usize)> = cache.iter().map(|(k, v)| (k.clone(), v.len())).collect();

    // Map and list agree
    prop_assert_eq!(listed.len(), cache.len());
    for (key, _) in &listed {
        prop_assert!(cache.contains(key.as_str()));
    }

    // Size counter is the sum of charges
    let actual: u64 = listed.iter().map(|(k, l)| Model::charge(k, *l)).sum();
    prop_assert_eq!(actual, cache.size_bytes());

    // Same contents in the same recency order as the model
    prop_assert_eq!(&listed, &model.entries);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_matches_reference_model(
        max_bytes in prop_oneof![Just(0u64), 1u64..64],
        ops in prop::collection::vec(cache_op_strategy(), 1..120),
    ) {
        let (mut cache, evicted) = recording_cache(max_bytes);
        let mut model = Model { max_bytes, ..Model::default() };

        for op in &ops {
            apply(&mut cache, op);
            model.apply(op);
            check_invariants(&cache, &model)?;
            prop_assert_eq!(&*evicted.lock().unwrap(), &model.evicted);
        }
    }

    #[test]
    fn prop_budget_holds_after_every_put(
        max_bytes in 1u64..48,
        puts in prop::collection::vec((KEY_SPACE, 0..=MAX_VALUE_LEN), 1..80),
    ) {
        let (mut cache, _evicted) = recording_cache(max_bytes);
        for (key, len) in puts {
            cache.put(key, vec![0u8; len]);
            prop_assert!(cache.is_empty() || cache.size_bytes() <= max_bytes);
        }
    }

    #[test]
    fn prop_replacement_is_not_eviction(
        key in KEY_SPACE,
        lens in prop::collection::vec(0..=MAX_VALUE_LEN, 1..20),
    ) {
        // Unbounded, so nothing can leave through the budget loop
        let (mut cache, evicted) = recording_cache(0);
        for len in &lens {
            cache.put(key.clone(), vec![0u8; *len]);
        }
        prop_assert!(evicted.lock().unwrap().is_empty());
        prop_assert_eq!(cache.len(), 1);
        let last = *lens.last().unwrap();
        prop_assert_eq!(cache.size_bytes(), (key.len() + last) as u64);
    }

    #[test]
    fn prop_get_on_singleton_is_idempotent(
        key in KEY_SPACE,
        len in 0..=MAX_VALUE_LEN,
        reads in 1usize..50,
    ) {
        let budget = (key.len() + len) as u64;
        let (mut cache, evicted) = recording_cache(budget);
        cache.put(key.clone(), vec![1u8; len]);
        for _ in 0..reads {
            prop_assert_eq!(cache.get(key.as_str()).map(Vec::len), Some(len));
        }
        prop_assert_eq!(cache.len(), 1);
        prop_assert_eq!(cache.size_bytes(), budget);
        prop_assert!(evicted.lock().unwrap().is_empty());
    }
}
