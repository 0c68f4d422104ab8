#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Budget Accounting
//!
//! Every resident entry is charged `key.byte_size() + value.byte_size()` against a
//! single byte budget. Keys and values report their size through [`ByteSize`].
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  put(key, value)                                                    │
//! │     │                                                               │
//! │     ├── key resident? ──Yes──▶ swap value, size += new - old        │
//! │     │                          move entry to front                  │
//! │     └── No ──▶ push entry at front, size += key + value             │
//! │                                                                     │
//! │  while max_bytes > 0 && size > max_bytes:                           │
//! │     pop back (LRU) ──▶ size -= its charge ──▶ on_evict(key, value)  │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Reference
//!
//! | Operation | Effect | Complexity |
//! |-----------|--------|------------|
//! | [`SizedLruCache::get`] | lookup + promote to most recently used | O(1) |
//! | [`SizedLruCache::put`] | insert or replace, then evict to budget | O(1) + evictions |
//! | [`SizedLruCache::remove_oldest`] | evict the least recently used entry | O(1) |
//! | [`SizedLruCache::len`] | number of resident entries | O(1) |
//!
//! ## Eviction Callback
//!
//! ```rust
//! use sized_lru::SizedLruCache;
//! use std::sync::{Arc, Mutex};
//!
//! let released = Arc::new(Mutex::new(0u64));
//! let counter = Arc::clone(&released);
//!
//! let mut cache: SizedLruCache<String, Vec<u8>> =
//!     SizedLruCache::with_evict_callback(1024, move |_key, value: Vec<u8>| {
//!         *counter.lock().unwrap() += value.len() as u64;
//!     });
//!
//! cache.put("a".to_string(), vec![0; 600]);
//! cache.put("b".to_string(), vec![0; 600]); // pushes "a" out
//! assert_eq!(*released.lock().unwrap(), 600);
//! assert_eq!(cache.len(), 1);
//! ```
//!
//! ## Sharing Across Threads
//!
//! The cache has no internal locking. Hold one lock for the duration of each call:
//!
//! ```rust
//! use sized_lru::SizedLruCache;
//! use std::sync::{Arc, Mutex};
//! use std::thread;
//!
//! let cache: Arc<Mutex<SizedLruCache<String, String>>> =
//!     Arc::new(Mutex::new(SizedLruCache::new(64 * 1024)));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 cache.lock().unwrap().put(format!("{t}-{i}"), "payload".to_string());
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.lock().unwrap().len(), 400);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: the byte-budgeted LRU cache
//! - [`size`]: the [`ByteSize`] capability
//! - [`entry`]: resident entries and their recorded charge
//! - [`config`]: configuration and validation
//! - [`metrics`]: hit/eviction counters for monitoring

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "hashbrown", feature = "std")))]
compile_error!("sized-lru needs a hash map: enable the `hashbrown` or the `std` feature");

/// The byte-size capability required of keys and values.
pub mod size;

/// Cache entry type holding a key, a value and the charge recorded for them.
pub mod entry;

/// Doubly linked list over an index-addressed arena.
///
/// Internal infrastructure: nodes are addressed by slot index so the cache map can
/// hold stable handles without raw pointers.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Byte-budgeted Least Recently Used (LRU) cache implementation.
pub mod lru;

/// Cache metrics system.
///
/// Counters for hits, misses, evictions and budget utilization, reported through
/// the [`CacheMetrics`](metrics::CacheMetrics) trait.
pub mod metrics;

pub use config::{ConfigError, SizedLruCacheConfig};
pub use entry::CacheEntry;
pub use lru::{EvictCallback, SizedLruCache};
pub use metrics::{CacheMetrics, SizedLruCacheMetrics};
pub use size::ByteSize;
