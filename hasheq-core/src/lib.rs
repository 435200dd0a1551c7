// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # hasheq-core
//!
//! The value kernel of a dynamic runtime: one equivalence relation, two
//! hash functions and one total order over every kind of [`Value`].
//!
//! - [`equiv`] unifies numbers across representations and compares
//!   collections structurally; [`equals`] is the stricter host equality.
//! - [`hasheq`] is consistent with [`equiv`]; [`hash`] is the host hash.
//! - [`compare`] orders `nil` first, numbers by the numeric tower, and
//!   everything else through its natural ordering.
//! - [`equiv_pred`] builds a predicate specialised to one seed value.

pub mod capability;
pub mod coll;
pub mod compare;
pub mod equiv;
pub mod error;
pub mod hash;
pub mod numbers;
pub mod seeds;
pub mod symbol;
pub mod value;

pub use capability::{Comparable, Equiv, HashEq, HostObject};
pub use coll::{PersistentList, PersistentMap, PersistentSet, PersistentVector};
pub use compare::{compare, sort};
pub use equiv::{EquivPred, equals, equiv, equiv_pred, identical, pcequiv};
pub use error::{Error, Result};
pub use hash::{
    array_hash, hash, hasheq, ordered_hash, product_hash, string_hasheq, unordered_hash,
};
pub use seeds::{HashSeeds, seeds};
pub use symbol::Symbol;
pub use value::Value;

// Re-export the bit-level primitives for hosts that hash their own aggregates
pub use hasheq_murmur::{STRING_SEED, hash_combine, hash_long, string_hash};
