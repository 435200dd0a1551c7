// hasheq - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # hasheq
//!
//! Facade over the kernel crates:
//!
//! - [`murmur`]: 32-bit mixing primitives and aggregate hashers
//! - [`kernel`]: the value model and the equivalence, hashing and ordering
//!   kernels, with the common items ([`Value`], [`equiv`], [`hasheq`],
//!   [`hash`], [`compare`], [`equiv_pred`]) re-exported at the root
//! - [`cache`]: weak-reference caches and [`sweep`]
//!
//! ```
//! use hasheq::{Value, equiv, hasheq};
//! use num_bigint::BigInt;
//!
//! let small = Value::vector(vec![Value::int(3)]);
//! let big = Value::list(vec![Value::bigint(BigInt::from(3))]);
//! assert!(equiv(&small, &big));
//! assert_eq!(hasheq(&small), hasheq(&big));
//! ```

pub use hasheq_cache as cache;
pub use hasheq_core as kernel;
pub use hasheq_murmur as murmur;

pub use hasheq_cache::{
    ReferenceQueue, SweepStats, Tracked, WeakCache, WeakCacheConfig, WeakRef, sweep,
};
pub use hasheq_core::{
    Comparable, Equiv, EquivPred, Error, HashEq, HashSeeds, HostObject, PersistentList,
    PersistentMap, PersistentSet, PersistentVector, Result, Symbol, Value, array_hash, compare,
    equals, equiv, equiv_pred, hash, hasheq, identical, ordered_hash, pcequiv, product_hash,
    seeds, sort, string_hasheq, unordered_hash,
};
