//! Bounded least-recently-used cache.
//!
//! `LruCache<K, V>` keeps its entries in an [`IndexMap`] whose iteration order
//! *is* the eviction order: the front is the least recently used entry, the
//! back the most recently used one.  A hit moves the entry to the back; an
//! insert into a full cache drops the front first.

use std::hash::Hash;

use indexmap::IndexMap;

/// A fixed-capacity map that evicts its least recently used entry.
#[derive(Debug, Clone)]
pub struct LruCache<K: Hash + Eq, V> {
    entries: IndexMap<K, V>,
    capacity: usize,
}

impl<K: Hash + Eq + std::fmt::Debug, V> LruCache<K, V> {
    /// Create an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: IndexMap::with_capacity(capacity),
            capacity,
        }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is cached.  Does not touch the recency order.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Look up `key` without touching the recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    // ── Mutators ─────────────────────────────────────────────────────────

    /// Look up `key` and mark it as most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let index = self.entries.get_index_of(key)?;
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        self.entries.get_index(last).map(|(_, v)| v)
    }

    /// Insert `value` under `key` as the most recently used entry.
    ///
    /// Returns the evicted `(key, value)` pair, if the cache was full.
    /// Replacing an existing key never evicts.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.entries.shift_remove(&key).is_some() {
            self.entries.insert(key, value);
            return None;
        }
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0)
        } else {
            None
        };
        if let Some((old, _)) = &evicted {
            tracing::trace!(evicted = ?old, inserted = ?key, "lru cache eviction");
        }
        self.entries.insert(key, value);
        evicted
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(cache: &LruCache<i32, &'static str>) -> Vec<i32> {
        cache.keys().copied().collect()
    }

    #[test]
    fn evicts_least_recently_inserted() {
        let mut cache = LruCache::new(2);
        assert!(cache.insert(1, "a").is_none());
        assert!(cache.insert(2, "b").is_none());
        assert_eq!(cache.insert(3, "c"), Some((1, "a")));
        assert_eq!(keys(&cache), vec![2, 3]);
    }

    #[test]
    fn hit_refreshes_recency() {
        let mut cache = LruCache::new(2);
        cache.insert(1, "a");
        cache.insert(2, "b");
        assert_eq!(cache.get(&1), Some(&"a"));
        assert_eq!(keys(&cache), vec![2, 1]);
        assert_eq!(cache.insert(3, "c"), Some((2, "b")));
        assert_eq!(keys(&cache), vec![1, 3]);
    }

    #[test]
    fn peek_does_not_refresh() {
        let mut cache = LruCache::new(2);
        cache.insert(1, "a");
        cache.insert(2, "b");
        assert_eq!(cache.peek(&1), Some(&"a"));
        assert_eq!(keys(&cache), vec![1, 2]);
    }

    #[test]
    fn replace_existing_key() {
        let mut cache = LruCache::new(2);
        cache.insert(1, "a");
        cache.insert(2, "b");
        assert!(cache.insert(1, "z").is_none());
        assert_eq!(cache.len(), 2);
        assert_eq!(keys(&cache), vec![2, 1]);
        assert_eq!(cache.peek(&1), Some(&"z"));
    }

    #[test]
    fn miss_returns_none() {
        let mut cache: LruCache<i32, &'static str> = LruCache::new(3);
        assert!(cache.get(&7).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_holds_one() {
        let mut cache = LruCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.insert(1, "a");
        assert_eq!(cache.insert(2, "b"), Some((1, "a")));
        assert_eq!(cache.len(), 1);
    }

    proptest::proptest! {
        #[test]
        fn bounded_and_last_touched_is_newest(
            capacity in 1usize..8,
            ops in proptest::collection::vec((0i32..12, proptest::bool::ANY), 0..64),
        ) {
            let mut cache = LruCache::new(capacity);
            for (key, is_get) in ops {
                let touched = if is_get {
                    cache.get(&key).is_some()
                } else {
                    cache.insert(key, "v");
                    true
                };
                proptest::prop_assert!(cache.len() <= capacity);
                if touched {
                    proptest::prop_assert_eq!(cache.keys().last(), Some(&key));
                }
            }
        }
    }
}
