// hasheq-cache - Weak-reference caches with opportunistic sweeping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Cache configuration.

/// Tuning knobs for a [`WeakCache`](crate::WeakCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeakCacheConfig {
    /// Entries to reserve room for up front
    pub initial_capacity: usize,
    /// Number of map shards; rounded up to a power of two, at least 2.
    /// `None` lets the map pick from the available parallelism.
    pub shard_amount: Option<usize>,
    /// Sweep before inserting a fresh entry
    pub sweep_on_insert: bool,
}

impl Default for WeakCacheConfig {
    fn default() -> Self {
        WeakCacheConfig {
            initial_capacity: 0,
            shard_amount: None,
            sweep_on_insert: true,
        }
    }
}

impl WeakCacheConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_shard_amount(mut self, shards: usize) -> Self {
        self.shard_amount = Some(shards);
        self
    }

    #[must_use]
    pub fn with_sweep_on_insert(mut self, enabled: bool) -> Self {
        self.sweep_on_insert = enabled;
        self
    }

    /// Shard count the underlying map accepts.
    pub(crate) fn effective_shard_amount(&self) -> Option<usize> {
        self.shard_amount.map(|n| n.max(2).next_power_of_two())
    }
}
