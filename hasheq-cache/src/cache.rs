// hasheq-cache - Weak-reference caches with opportunistic sweeping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! A concurrent cache of weakly held values.
//!
//! The cache owns a map from keys to [`WeakRef`]s and the
//! [`ReferenceQueue`] its values report to. Callers hold the strong
//! handles; once the last one goes, the entry is stale and the next sweep
//! reclaims it.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::config::WeakCacheConfig;
use crate::reference::{ReferenceQueue, Tracked, WeakRef};
use crate::sweep::{SweepStats, sweep};

/// Concurrent map from keys to weakly held values.
pub struct WeakCache<K, V>
where
    K: Eq + Hash,
{
    table: DashMap<K, WeakRef<V>>,
    queue: Arc<ReferenceQueue>,
    config: WeakCacheConfig,
}

impl<K, V> WeakCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::with_config(WeakCacheConfig::default())
    }

    pub fn with_config(config: WeakCacheConfig) -> Self {
        let table = match config.effective_shard_amount() {
            Some(shards) => {
                DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards)
            }
            None => DashMap::with_capacity(config.initial_capacity),
        };
        WeakCache {
            table,
            queue: Arc::new(ReferenceQueue::new()),
            config,
        }
    }

    /// The live value under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<Tracked<V>>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.table.get(key).and_then(|entry| entry.get())
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn insert(&self, key: K, value: V) -> Arc<Tracked<V>> {
        if self.config.sweep_on_insert {
            self.sweep();
        }
        let tracked = Tracked::new(value, &self.queue);
        self.table.insert(key, WeakRef::new(&tracked));
        tracked
    }

    /// The live value under `key`, creating it with `make` if there is none.
    ///
    /// Concurrent callers interning the same key all get the same value.
    /// `make` runs before any shard lock is taken, so it may use this cache;
    /// if another caller wins the race its value is returned and the one
    /// `make` built is dropped untracked.
    pub fn intern<F>(&self, key: K, make: F) -> Arc<Tracked<V>>
    where
        F: FnOnce() -> V,
    {
        if let Some(live) = self.get(&key) {
            return live;
        }
        if self.config.sweep_on_insert {
            self.sweep();
        }
        let fresh = make();
        match self.table.entry(key) {
            Entry::Occupied(mut e) => match e.get().get() {
                Some(live) => live,
                None => {
                    let tracked = Tracked::new(fresh, &self.queue);
                    e.insert(WeakRef::new(&tracked));
                    tracked
                }
            },
            Entry::Vacant(e) => {
                let tracked = Tracked::new(fresh, &self.queue);
                e.insert(WeakRef::new(&tracked));
                tracked
            }
        }
    }

    /// Remove entries whose values have been dropped.
    pub fn sweep(&self) -> SweepStats {
        sweep(&self.queue, &self.table)
    }

    /// Number of entries, including stale ones not yet swept.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The queue values in this cache report to.
    pub fn queue(&self) -> &Arc<ReferenceQueue> {
        &self.queue
    }

    pub fn config(&self) -> &WeakCacheConfig {
        &self.config
    }
}

impl<K, V> Default for WeakCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for WeakCache<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakCache")
            .field("entries", &self.table.len())
            .field("pending", &self.queue.len())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lazy() -> WeakCache<String, u32> {
        WeakCache::with_config(WeakCacheConfig::new().with_sweep_on_insert(false))
    }

    #[test]
    fn test_get_returns_live_value() {
        let cache = lazy();
        let held = cache.insert("a".to_string(), 1);
        assert_eq!(cache.get("a").map(|t| **t), Some(1));
        drop(held);
        assert!(cache.get("a").is_none());
        // Stale until swept
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.sweep().removed, 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_intern_reuses_live_value() {
        let cache = lazy();
        let first = cache.intern("k".to_string(), || 10);
        let second = cache.intern("k".to_string(), || 20);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(**second, 10);
    }

    #[test]
    fn test_intern_replaces_cleared_value() {
        let cache = lazy();
        let first_id = cache.intern("k".to_string(), || 10).id();
        let second = cache.intern("k".to_string(), || 20);
        assert_ne!(second.id(), first_id);
        assert_eq!(**second, 20);
        // The replacement survives the sweep the first value's drop queued
        assert_eq!(cache.sweep().removed, 0);
        assert_eq!(cache.get("k").map(|t| **t), Some(20));
    }

    #[test]
    fn test_intern_maker_may_reenter_cache() {
        let cache = lazy();
        let _base = cache.insert("base".to_string(), 5);
        let derived = cache.intern("derived".to_string(), || {
            let base = cache.get("base").map_or(0, |t| **t);
            let _dep = cache.intern("dep".to_string(), || base + 1);
            base * 10
        });
        assert_eq!(**derived, 50);
    }

    #[test]
    fn test_intern_race_loser_is_not_queued() {
        let cache = lazy();
        let mut winner = None;
        // Another insert lands between building the value and claiming the entry
        let got = cache.intern("k".to_string(), || {
            winner = Some(cache.insert("k".to_string(), 2));
            3
        });
        assert_eq!(**got, 2);
        assert!(winner.as_ref().is_some_and(|w| Arc::ptr_eq(w, &got)));
        // Only the winning value was ever tracked
        drop(winner);
        drop(got);
        assert_eq!(cache.queue().len(), 1);
    }

    #[test]
    fn test_sweep_on_insert() {
        let cache: WeakCache<String, u32> = WeakCache::new();
        drop(cache.insert("old".to_string(), 1));
        let _keep = cache.insert("new".to_string(), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.queue().is_empty());
    }

    #[test]
    fn test_custom_shards() {
        let cache: WeakCache<u64, u64> =
            WeakCache::with_config(WeakCacheConfig::new().with_shard_amount(3));
        let held: Vec<_> = (0..100).map(|n| cache.insert(n, n * 2)).collect();
        assert_eq!(cache.len(), 100);
        assert_eq!(cache.get(&42u64).map(|t| **t), Some(84));
        drop(held);
    }
}
