// hasheq-cache - Weak-reference caches with opportunistic sweeping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Reference management.
//!
//! A [`Tracked`] value reports to its [`ReferenceQueue`] when the last
//! strong handle to it goes away. A [`WeakRef`] observes a tracked value
//! without keeping it alive. Together they let a cache learn that some of
//! its entries have gone stale without scanning on every access.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use crossbeam_queue::SegQueue;

static NEXT_REFERENT_ID: AtomicU64 = AtomicU64::new(1);

// ============================================================================
// ReferenceQueue
// ============================================================================

/// Lock-free queue of notices that tracked referents were dropped.
///
/// Each notice carries the referent's id. Sweeping only cares whether the
/// queue is non-empty, but the ids are useful when debugging.
#[derive(Debug, Default)]
pub struct ReferenceQueue {
    pending: SegQueue<u64>,
}

impl ReferenceQueue {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: SegQueue::new(),
        }
    }

    /// Record that the referent `id` has become unreachable.
    pub fn enqueue(&self, id: u64) {
        tracing::trace!(referent = id, "referent enqueued");
        self.pending.push(id);
    }

    /// Take one pending notice, if any.
    pub fn poll(&self) -> Option<u64> {
        self.pending.pop()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// ============================================================================
// Tracked
// ============================================================================

/// A value that notifies a reference queue when it is dropped.
pub struct Tracked<V> {
    value: V,
    id: u64,
    queue: Weak<ReferenceQueue>,
}

impl<V> Tracked<V> {
    /// Wrap `value`, registering it with `queue`.
    ///
    /// The queue is held weakly, so a tracked value never keeps its
    /// queue alive.
    pub fn new(value: V, queue: &Arc<ReferenceQueue>) -> Arc<Self> {
        Arc::new(Tracked {
            value,
            id: NEXT_REFERENT_ID.fetch_add(1, Ordering::Relaxed),
            queue: Arc::downgrade(queue),
        })
    }

    /// Process-unique id of this referent.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V> Deref for Tracked<V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.value
    }
}

impl<V> Drop for Tracked<V> {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.enqueue(self.id);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Tracked<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("id", &self.id)
            .field("value", &self.value)
            .finish()
    }
}

// ============================================================================
// WeakRef
// ============================================================================

/// A non-owning reference to a tracked value.
pub struct WeakRef<V>(Weak<Tracked<V>>);

impl<V> WeakRef<V> {
    pub fn new(referent: &Arc<Tracked<V>>) -> Self {
        WeakRef(Arc::downgrade(referent))
    }

    /// The referent, if it is still alive.
    pub fn get(&self) -> Option<Arc<Tracked<V>>> {
        self.0.upgrade()
    }

    /// True once the referent has been dropped.
    pub fn is_cleared(&self) -> bool {
        self.0.strong_count() == 0
    }

    /// True if both refer to the same referent allocation.
    pub fn same_as(&self, other: &WeakRef<V>) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl<V> Clone for WeakRef<V> {
    fn clone(&self) -> Self {
        WeakRef(self.0.clone())
    }
}

impl<V> fmt::Debug for WeakRef<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakRef")
            .field("cleared", &self.is_cleared())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_notifies_queue() {
        let queue = Arc::new(ReferenceQueue::new());
        let tracked = Tracked::new("value", &queue);
        let id = tracked.id();
        assert!(queue.is_empty());
        drop(tracked);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.poll(), Some(id));
        assert!(queue.poll().is_none());
    }

    #[test]
    fn test_clone_of_handle_does_not_notify() {
        let queue = Arc::new(ReferenceQueue::new());
        let tracked = Tracked::new(1, &queue);
        let other = Arc::clone(&tracked);
        drop(tracked);
        assert!(queue.is_empty());
        assert_eq!(**other, 1);
        drop(other);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_weak_ref_clears_with_referent() {
        let queue = Arc::new(ReferenceQueue::new());
        let tracked = Tracked::new(String::from("kw"), &queue);
        let weak = WeakRef::new(&tracked);
        assert!(!weak.is_cleared());
        assert_eq!(weak.get().map(|t| t.value().clone()), Some("kw".to_string()));
        drop(tracked);
        assert!(weak.is_cleared());
        assert!(weak.get().is_none());
    }

    #[test]
    fn test_same_as_distinguishes_referents() {
        let queue = Arc::new(ReferenceQueue::new());
        let a = Tracked::new(1, &queue);
        let b = Tracked::new(1, &queue);
        let wa = WeakRef::new(&a);
        assert!(wa.same_as(&wa.clone()));
        assert!(wa.same_as(&WeakRef::new(&a)));
        assert!(!wa.same_as(&WeakRef::new(&b)));
    }

    #[test]
    fn test_dropped_queue_is_not_kept_alive() {
        let queue = Arc::new(ReferenceQueue::new());
        let tracked = Tracked::new(7, &queue);
        drop(queue);
        // Nowhere to report to; dropping must still be fine
        drop(tracked);
    }
}
