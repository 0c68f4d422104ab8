//! Cache Configuration Module
//!
//! This module provides the configuration structure for [`SizedLruCache`](crate::SizedLruCache).
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: A byte budget is a `u64`, so a negative budget cannot be built
//! - **Validated conversions**: Signed values coming from outside (flags, config
//!   files, other services) go through `TryFrom<i64>` and fail with [`ConfigError`]
//!
//! # Sizing Guidelines
//!
//! `max_bytes` bounds the sum of `key.byte_size() + value.byte_size()` over all
//! resident entries. It does not include per-entry bookkeeping:
//!
//! ```text
//! Total Memory ≈ max_bytes + (entries × overhead_per_entry)
//! overhead_per_entry ≈ 48-64 bytes (map slot, list links, recorded size)
//! ```
//!
//! **Example**: 64MB hot set with ~4KB average values:
//! - `max_bytes = 64 * 1024 * 1024`
//! - about 16,000 entries, ≈ 1MB of bookkeeping on top
//!
//! A `max_bytes` of `0` disables size-driven eviction entirely.
//!
//! # Examples
//!
//! ```
//! use sized_lru::config::SizedLruCacheConfig;
//! use sized_lru::SizedLruCache;
//!
//! let config = SizedLruCacheConfig {
//!     max_bytes: 10 * 1024 * 1024, // 10MB
//! };
//!
//! let cache: SizedLruCache<String, Vec<u8>> = SizedLruCache::init(config, None);
//! assert_eq!(cache.max_bytes(), 10 * 1024 * 1024);
//! ```

pub mod lru;

pub use lru::{ConfigError, SizedLruCacheConfig};
