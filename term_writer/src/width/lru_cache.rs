// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A small capped LRU cache backing the per-character width lookup in
//! [`super::char_width`].
//!
//! Lookups go through [`rustc_hash::FxHashMap`]. Keys here are `char`s that this
//! process has already written, so there is no need for a DoS resistant hasher.
//! Recency is tracked with a monotonic access counter; when the cache is full the entry
//! with the smallest counter is evicted. Eviction is `O(n)` in the capacity, which is
//! fine for the handful of entries this cache holds.

use std::hash::Hash;

use rustc_hash::{FxBuildHasher, FxHashMap};

#[derive(Clone, Copy, Debug)]
struct CacheEntry<V> {
    value: V,
    access_count: u64,
}

#[derive(Debug)]
pub struct LruCache<K, V> {
    map: FxHashMap<K, CacheEntry<V>>,
    capacity: usize,
    access_counter: u64,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Copy,
    V: Copy,
{
    /// A `capacity` of `0` is bumped to `1`, so an insert is always retained.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            capacity,
            access_counter: 0,
        }
    }

    /// Marks the entry as recently used.
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.access_counter += 1;
        let access_counter = self.access_counter;
        self.map.get_mut(key).map(|entry| {
            entry.access_count = access_counter;
            entry.value
        })
    }

    /// Returns the value previously stored for `key`, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.access_counter += 1;

        if self.map.len() >= self.capacity
            && !self.map.contains_key(&key)
            && let Some(lru_key) = self
                .map
                .iter()
                .min_by_key(|(_, entry)| entry.access_count)
                .map(|(key, _)| *key)
        {
            self.map.remove(&lru_key);
        }

        let entry = CacheEntry {
            value,
            access_count: self.access_counter,
        };
        self.map.insert(key, entry).map(|it| it.value)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.map.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Does not count as an access.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool { self.map.contains_key(key) }
}
