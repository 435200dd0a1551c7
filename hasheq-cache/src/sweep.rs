// hasheq-cache - Weak-reference caches with opportunistic sweeping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Opportunistic removal of cleared cache entries.

use std::hash::{BuildHasher, Hash};

use dashmap::DashMap;

use crate::reference::{ReferenceQueue, WeakRef};

/// What one call to [`sweep`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Notices taken off the queue
    pub drained: usize,
    /// Entries inspected
    pub scanned: usize,
    /// Entries removed
    pub removed: usize,
}

impl SweepStats {
    /// True if the queue was empty and nothing was looked at.
    pub fn is_noop(&self) -> bool {
        self.drained == 0
    }
}

/// Drop every cache entry whose referent has been cleared.
///
/// Does nothing, not even a scan, unless `queue` has at least one pending
/// notice. Otherwise the queue is drained and the cache scanned once. An
/// entry is only removed if it still holds the exact reference that was
/// seen cleared, so a live value re-inserted under the same key in the
/// meantime survives.
///
/// Never blocks on anything but the map's own shard locks, and is safe to
/// run from several threads at once.
pub fn sweep<K, V, S>(queue: &ReferenceQueue, cache: &DashMap<K, WeakRef<V>, S>) -> SweepStats
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    if queue.poll().is_none() {
        return SweepStats::default();
    }
    let mut stats = SweepStats {
        drained: 1,
        ..SweepStats::default()
    };
    while queue.poll().is_some() {
        stats.drained += 1;
    }

    // Snapshot first: removing while iterating would deadlock on the shard.
    let mut dead = Vec::new();
    for entry in cache.iter() {
        stats.scanned += 1;
        if entry.value().is_cleared() {
            dead.push((entry.key().clone(), entry.value().clone()));
        }
    }

    for (key, seen) in dead {
        let removed = cache.remove_if(&key, |_, current| {
            current.is_cleared() && current.same_as(&seen)
        });
        if removed.is_some() {
            stats.removed += 1;
            tracing::trace!("removed cleared cache entry");
        }
    }

    tracing::debug!(
        drained = stats.drained,
        scanned = stats.scanned,
        removed = stats.removed,
        "swept weak cache"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Tracked;
    use std::sync::Arc;

    fn table() -> DashMap<&'static str, WeakRef<u32>> {
        DashMap::new()
    }

    #[test]
    fn test_empty_queue_skips_scan() {
        let queue = Arc::new(ReferenceQueue::new());
        let cache = table();
        let t = Tracked::new(1, &queue);
        cache.insert("a", WeakRef::new(&t));
        // Cleared, but the notice is discarded before sweeping
        drop(t);
        assert!(queue.poll().is_some());

        let stats = sweep(&queue, &cache);
        assert!(stats.is_noop());
        assert_eq!(stats.scanned, 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_removes_only_cleared_entries() {
        let queue = Arc::new(ReferenceQueue::new());
        let cache = table();
        let live = Tracked::new(1, &queue);
        let dead = Tracked::new(2, &queue);
        cache.insert("live", WeakRef::new(&live));
        cache.insert("dead", WeakRef::new(&dead));
        drop(dead);

        let stats = sweep(&queue, &cache);
        assert_eq!(
            stats,
            SweepStats {
                drained: 1,
                scanned: 2,
                removed: 1
            }
        );
        assert!(cache.contains_key("live"));
        assert!(!cache.contains_key("dead"));
    }

    #[test]
    fn test_replaced_entry_survives() {
        let queue = Arc::new(ReferenceQueue::new());
        let cache = table();
        let old = Tracked::new(1, &queue);
        cache.insert("k", WeakRef::new(&old));
        drop(old);
        let fresh = Tracked::new(2, &queue);
        cache.insert("k", WeakRef::new(&fresh));

        let stats = sweep(&queue, &cache);
        assert_eq!(stats.removed, 0);
        let held = cache.get("k").and_then(|r| r.get());
        assert_eq!(held.map(|t| **t), Some(2));
    }

    #[test]
    fn test_drains_all_notices() {
        let queue = Arc::new(ReferenceQueue::new());
        let cache = table();
        for n in 0..5 {
            drop(Tracked::new(n, &queue));
        }
        let stats = sweep(&queue, &cache);
        assert_eq!(stats.drained, 5);
        assert!(queue.is_empty());
        assert!(sweep(&queue, &cache).is_noop());
    }
}
