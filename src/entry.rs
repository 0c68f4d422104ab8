//! Cache Entry Type
//!
//! A resident entry pairs a key and value with the budget charge recorded when
//! the entry was created or last replaced. The charge is what eviction and
//! removal give back to the size counter, so the counter always equals the sum
//! of the charges of resident entries even if a value's reported size drifts.
//!
//! # Memory Layout
//!
//! - `key: K` - User's key type
//! - `value: V` - User's value type
//! - `size: u64` - 8 bytes (charge against the byte budget)
//!
//! The arena list adds two `Option<usize>` links per node.

use crate::size::ByteSize;
use core::fmt;

/// A key-value pair together with its charge against the cache budget.
///
/// # Examples
///
/// ```
/// use sized_lru::entry::CacheEntry;
///
/// let entry = CacheEntry::sized("user:1", String::from("Alice"));
/// assert_eq!(entry.size, 6 + 5);
///
/// // Explicit charge, for callers that account in their own unit
/// let entry: CacheEntry<&str, i32> = CacheEntry::new("key", 42, 1);
/// assert_eq!(entry.size, 1);
/// ```
pub struct CacheEntry<K, V> {
    /// The cached key
    pub key: K,

    /// The cached value (or handle to an external resource)
    pub value: V,

    /// Bytes this entry occupies in the budget: key size plus value size.
    pub size: u64,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new cache entry with an explicit charge.
    #[inline]
    pub fn new(key: K, value: V, size: u64) -> Self {
        Self { key, value, size }
    }

    /// Swaps in a new value and charge, returning the previous value.
    ///
    /// The key is left untouched.
    #[inline]
    pub fn replace(&mut self, value: V, size: u64) -> V {
        self.size = size;
        core::mem::replace(&mut self.value, value)
    }

    /// Splits the entry into its key and value.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: ByteSize, V: ByteSize> CacheEntry<K, V> {
    /// Creates an entry charged `key.byte_size() + value.byte_size()`.
    #[inline]
    pub fn sized(key: K, value: V) -> Self {
        let size = charge(&key, &value);
        Self { key, value, size }
    }
}

/// Budget charge of a key-value pair.
#[inline]
pub(crate) fn charge<K: ByteSize + ?Sized, V: ByteSize + ?Sized>(key: &K, value: &V) -> u64 {
    key.byte_size() as u64 + value.byte_size() as u64
}

impl<K: Clone, V: Clone> Clone for CacheEntry<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            size: self.size,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("size", &self.size)
            .finish()
    }
}
