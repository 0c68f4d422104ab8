//! Configuration for the byte-budgeted LRU cache.
//!
//! # Examples
//!
//! ```
//! use sized_lru::config::SizedLruCacheConfig;
//! use sized_lru::SizedLruCache;
//!
//! // In-memory cache: 50MB budget for keys and values
//! let config = SizedLruCacheConfig {
//!     max_bytes: 50 * 1024 * 1024,
//! };
//! let cache: SizedLruCache<String, Vec<u8>> = SizedLruCache::init(config, None);
//!
//! // Budget taken from a signed setting
//! let config = SizedLruCacheConfig::try_from(2048_i64).unwrap();
//! assert_eq!(config.max_bytes, 2048);
//! assert!(SizedLruCacheConfig::try_from(-1_i64).is_err());
//! ```

use core::fmt;
use thiserror::Error;

/// Errors raised while building a cache configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The byte budget was negative.
    #[error("cache capacity must not be negative, got {0} bytes")]
    NegativeCapacity(i64),
}

/// Configuration for a byte-budgeted LRU cache.
///
/// # Fields
///
/// - `max_bytes`: Maximum sum of key and value sizes the cache may hold.
///   `0` means unbounded: entries are only dropped through `remove_oldest`,
///   `remove` or `clear`.
///
/// # Examples
///
/// ```
/// use sized_lru::config::SizedLruCacheConfig;
/// use sized_lru::SizedLruCache;
///
/// let config = SizedLruCacheConfig { max_bytes: 4096 };
/// let mut cache: SizedLruCache<&str, &str> = SizedLruCache::init(config, None);
/// cache.put("greeting", "hello");
/// assert_eq!(cache.size_bytes(), 13);
///
/// let unbounded = SizedLruCacheConfig::unbounded();
/// assert!(unbounded.is_unbounded());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct SizedLruCacheConfig {
    /// Maximum total size in bytes of resident keys and values; `0` disables the limit.
    pub max_bytes: u64,
}

impl SizedLruCacheConfig {
    /// Configuration without a byte limit.
    pub const fn unbounded() -> Self {
        Self { max_bytes: 0 }
    }

    /// Returns true if size-driven eviction is disabled.
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        self.max_bytes == 0
    }
}

impl TryFrom<i64> for SizedLruCacheConfig {
    type Error = ConfigError;

    fn try_from(max_bytes: i64) -> Result<Self, Self::Error> {
        u64::try_from(max_bytes)
            .map(|max_bytes| Self { max_bytes })
            .map_err(|_| ConfigError::NegativeCapacity(max_bytes))
    }
}

impl From<u64> for SizedLruCacheConfig {
    fn from(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl fmt::Debug for SizedLruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedLruCacheConfig")
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}
