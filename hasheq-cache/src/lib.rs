// hasheq-cache - Weak-reference caches with opportunistic sweeping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # hasheq-cache
//!
//! Caches that hold their values weakly, such as the keyword table of a
//! dynamic runtime. Values report their own death to a per-cache
//! [`ReferenceQueue`]; [`sweep`] drains that queue and reclaims stale
//! entries in one pass, and does nothing at all while the queue is empty.

pub mod cache;
pub mod config;
pub mod reference;
pub mod sweep;

pub use cache::WeakCache;
pub use config::WeakCacheConfig;
pub use reference::{ReferenceQueue, Tracked, WeakRef};
pub use sweep::{SweepStats, sweep};
