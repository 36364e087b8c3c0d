//! # Cache Trait Hierarchy
//!
//! Capability traits shared by the crate's caches, split the same way the
//! operations split in practice: what every cache can do, what can be removed
//! by key, and what only makes sense under recency ordering.
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │ CoreCache<K, V>              │  put / get / contains / len / capacity / clear
//!   └──────────────┬───────────────┘
//!                  ▼
//!   ┌──────────────────────────────┐
//!   │ MutableCache<K, V>           │  remove
//!   └──────────────┬───────────────┘
//!                  ▼
//!   ┌──────────────────────────────┐
//!   │ LruCacheTrait<K, V>          │  pop_lru / peek_lru / touch / recency_rank
//!   └──────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! None of these traits imply `Sync`. `get` reorders entries, so even lookups
//! need exclusive access; see
//! `ConcurrentRecentCache` (feature `concurrency`) for a locked wrapper.

/// Core cache operations that all caches support.
///
/// # Example
///
/// ```
/// use shelfkit::policy::recent::BoundedRecentCache;
/// use shelfkit::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.put(*key, value.clone());
///     }
/// }
///
/// let mut cache = BoundedRecentCache::try_new(100).unwrap();
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(CoreCache::len(&cache), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts or replaces a value, returning the previous one for `key`.
    ///
    /// If the cache is full and `key` is new, one entry is evicted first.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a value by key.
    ///
    /// A hit may update eviction state. Use [`contains`](Self::contains) to
    /// check existence without doing so.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches that support removal of arbitrary keys.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key`, returning its value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes each key in `keys`, returning the results in order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Recency-ordered caches.
///
/// # Example
///
/// ```
/// use shelfkit::policy::recent::BoundedRecentCache;
/// use shelfkit::traits::{CoreCache, LruCacheTrait};
///
/// let mut cache = BoundedRecentCache::try_new(3).unwrap();
/// cache.put(1, "first");
/// cache.put(2, "second");
/// cache.put(3, "third");
///
/// // Access key 1 to make it MRU
/// cache.get(&1);
/// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
///
/// assert!(cache.touch(&2)); // Now key 3 is LRU
/// assert_eq!(cache.pop_lru().map(|(k, _)| k), Some(3));
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Peeks at the least recently used entry without reordering.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` as most recently used; returns `false` if absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of `key` in recency order, 0 being most recent.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}
