//! # Bounded Recent Cache (LRU)
//!
//! Fixed-capacity map that evicts the least-recently-used entry when a new
//! key arrives at capacity. Used by the catalog to keep recently viewed books
//! close at hand.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                   BoundedRecentCache<K, V>                           │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>  (key → list node)                     │   │
//!   │   │                                                              │   │
//!   │   │   book_17 ──────────────┐                                    │   │
//!   │   │   book_42 ────────┐     │                                    │   │
//!   │   │   book_3  ──┐     │     │                                    │   │
//!   │   └─────────────┼─────┼─────┼────────────────────────────────────┘   │
//!   │                 ▼     ▼     ▼                                        │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  IntrusiveList<Entry<K, V>>  (recency order)                 │   │
//!   │   │                                                              │   │
//!   │   │  head ──► [3] ◄──► [42] ◄──► [17] ◄── tail                   │   │
//!   │   │   (MRU)                           (LRU, evicted first)       │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//!
//! ```text
//!   capacity = 2
//!
//!   put(1, "a")   head ─► [1]
//!   put(2, "b")   head ─► [2] ◄──► [1]
//!   get(&1)       head ─► [1] ◄──► [2]        (hit refreshes recency)
//!   put(3, "c")   evict tail [2], then
//!                 head ─► [3] ◄──► [1]
//! ```
//!
//! ## Operations
//!
//! | Method             | Complexity | Description                               |
//! |--------------------|------------|-------------------------------------------|
//! | `try_new(cap)`     | O(1)       | Fails on zero capacity                    |
//! | `put(k, v)`        | O(1)*      | Insert or update, may evict the LRU entry |
//! | `get(&k)`          | O(1)       | Get value, moves entry to MRU             |
//! | `peek(&k)`         | O(1)       | Get value without reordering              |
//! | `remove(&k)`       | O(1)       | Remove entry by key                       |
//! | `pop_lru()`        | O(1)       | Remove and return the LRU entry           |
//! | `touch(&k)`        | O(1)       | Move to MRU without returning the value   |
//! | `recency_rank(&k)` | O(n)       | Position in recency order (0 = MRU)       |
//! | `keys_lru_to_mru`  | O(n)       | Ordered key snapshot                      |
//!
//! ## Thread Safety
//!
//! `BoundedRecentCache` is not thread-safe. With the `concurrency` feature,
//! [`ConcurrentRecentCache`] wraps one instance in a `parking_lot::Mutex`; a
//! read lock would not do because `get` reorders entries.
//!
//! ## Example Usage
//!
//! ```
//! use shelfkit::policy::recent::BoundedRecentCache;
//!
//! let mut cache = BoundedRecentCache::try_new(2).unwrap();
//! cache.put(1, "a");
//! cache.put(2, "b");
//! cache.get(&1);
//! cache.put(3, "c");
//!
//! assert!(!cache.contains(&2));
//! assert_eq!(cache.keys_lru_to_mru(), vec![1, 3]);
//! ```
use std::hash::Hash;
use std::mem;
use std::num::NonZeroUsize;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::ds::{IntrusiveList, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
    RecentCacheMetrics, RecentCacheMetricsSnapshot,
};
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity LRU cache.
///
/// Capacity is set at construction and never changes. The list front holds
/// the most recently used entry.
#[derive(Debug)]
pub struct BoundedRecentCache<K, V> {
    index: FxHashMap<K, SlotId>,
    list: IntrusiveList<Entry<K, V>>,
    capacity: NonZeroUsize,
    #[cfg(feature = "metrics")]
    metrics: RecentCacheMetrics,
}

impl<K, V> BoundedRecentCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Example
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use shelfkit::policy::recent::BoundedRecentCache;
    ///
    /// let cache: BoundedRecentCache<u64, String> =
    ///     BoundedRecentCache::new(NonZeroUsize::new(100).unwrap());
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity.get(), Default::default()),
            list: IntrusiveList::with_capacity(capacity.get()),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: RecentCacheMetrics::default(),
        }
    }

    /// Fallible constructor for user-supplied capacities.
    ///
    /// Returns [`ConfigError`] when `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or_else(|| ConfigError::new("cache capacity must be > 0"))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns `true` if the key exists. Does not update recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Gets a value and marks it most recently used.
    ///
    /// A miss returns `None` and changes nothing.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Mutable variant of [`get`](Self::get); also refreshes recency.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = *self.index.get(key)?;
        self.list.move_to_front(id);
        self.list.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Gets a value without touching recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let id = *self.index.get(key)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_hit();

        self.list.get(id).map(|entry| &entry.value)
    }

    /// Inserts or replaces `key`, making it the most recently used entry.
    ///
    /// Replacing returns the previous value. A new key at capacity first
    /// evicts exactly one entry, the least recently used.
    ///
    /// # Example
    ///
    /// ```
    /// use shelfkit::policy::recent::BoundedRecentCache;
    ///
    /// let mut cache = BoundedRecentCache::try_new(2).unwrap();
    /// assert_eq!(cache.put(1, "a"), None);
    /// assert_eq!(cache.put(2, "b"), None);
    /// assert_eq!(cache.put(1, "A"), Some("a"));
    ///
    /// cache.put(3, "c"); // evicts key 2
    /// assert!(!cache.contains(&2));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_put_update();

            self.list.move_to_front(id);
            return self
                .list
                .get_mut(id)
                .map(|entry| mem::replace(&mut entry.value, value));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_put_new();

        if self.len() >= self.capacity() {
            self.evict_lru();
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        None
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.list.remove(id).map(|entry| entry.value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        Some((entry.key, entry.value))
    }

    /// Peeks at the least recently used entry.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|entry| (&entry.key, &entry.value))
    }

    /// Moves `key` to the most recently used position.
    ///
    /// Returns `false` if the key is absent.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        match self.index.get(key) {
            Some(&id) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_touch_found();
                self.list.move_to_front(id)
            },
            None => false,
        }
    }

    /// Position of `key` in recency order (0 = most recently used). O(n).
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        if !self.index.contains_key(key) {
            return None;
        }
        self.list.iter().position(|entry| &entry.key == key)
    }

    /// Keys ordered from least to most recently used.
    pub fn keys_lru_to_mru(&self) -> Vec<K> {
        self.list.iter_rev().map(|entry| entry.key.clone()).collect()
    }

    /// Entries ordered from least to most recently used.
    pub fn iter_lru_to_mru(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter_rev().map(|entry| (&entry.key, &entry.value))
    }

    /// Entries ordered from most to least recently used.
    pub fn iter_mru_to_lru(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.list.clear();
    }

    /// Checks that the index, the recency list and the capacity agree.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.validate_links().map_err(InvariantError::new)?;

        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {}",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.len() > self.capacity() {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len(),
                self.capacity()
            )));
        }
        for (key, &id) in &self.index {
            match self.list.get(id) {
                Some(entry) if &entry.key == key => {},
                Some(_) => return Err(InvariantError::new("index points at another key's node")),
                None => return Err(InvariantError::new("index points at a freed node")),
            }
        }
        Ok(())
    }

    fn evict_lru(&mut self) {
        if let Some(entry) = self.list.pop_back() {
            self.index.remove(&entry.key);

            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();

            debug!(
                len = self.index.len(),
                capacity = self.capacity.get(),
                "evicted least-recently-used cache entry"
            );
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> BoundedRecentCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> RecentCacheMetricsSnapshot {
        RecentCacheMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            put_calls: self.metrics.put_calls,
            put_updates: self.metrics.put_updates,
            put_new: self.metrics.put_new,
            evicted_entries: self.metrics.evicted_entries,
            clears: self.metrics.clears,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_hits: self.metrics.peek_hits.get(),
            cache_len: self.index.len(),
            capacity: self.capacity.get(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<RecentCacheMetricsSnapshot> for BoundedRecentCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> RecentCacheMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> CoreCache<K, V> for BoundedRecentCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        BoundedRecentCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        BoundedRecentCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        BoundedRecentCache::contains(self, key)
    }

    fn len(&self) -> usize {
        BoundedRecentCache::len(self)
    }

    fn capacity(&self) -> usize {
        BoundedRecentCache::capacity(self)
    }

    fn clear(&mut self) {
        BoundedRecentCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for BoundedRecentCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        BoundedRecentCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for BoundedRecentCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        BoundedRecentCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        BoundedRecentCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        BoundedRecentCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        BoundedRecentCache::recency_rank(self, key)
    }
}

// ---------------------------------------------------------------------------
// ConcurrentRecentCache
// ---------------------------------------------------------------------------

/// Thread-safe wrapper serializing access to one [`BoundedRecentCache`].
///
/// Values are returned by clone since no reference may outlive the lock.
#[cfg(feature = "concurrency")]
#[derive(Debug)]
pub struct ConcurrentRecentCache<K, V> {
    inner: parking_lot::Mutex<BoundedRecentCache<K, V>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentRecentCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: parking_lot::Mutex::new(BoundedRecentCache::new(capacity)),
        }
    }

    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        BoundedRecentCache::try_new(capacity).map(|cache| Self {
            inner: parking_lot::Mutex::new(cache),
        })
    }

    /// Gets a clone of the value and refreshes its recency.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }

    pub fn peek(&self, key: &K) -> Option<V> {
        self.inner.lock().peek(key).cloned()
    }

    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn keys_lru_to_mru(&self) -> Vec<K> {
        self.inner.lock().keys_lru_to_mru()
    }

    /// Runs `f` with exclusive access to the underlying cache.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut BoundedRecentCache<K, V>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
