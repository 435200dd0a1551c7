// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The equivalence kernel.
//!
//! [`equiv`] is the language-level equality: identical values are always
//! equivalent, numbers unify across representations, collections compare
//! structurally, and everything else falls back to natural equality.
//!
//! [`EquivPred`] precomputes the dispatch for a fixed seed so that probing
//! many candidates against one key (hash-table collision chains) skips the
//! type dispatch on every probe.

use std::sync::Arc;

use crate::numbers;
use crate::value::Value;

/// Identity: the same heap object, or the same immediate value.
///
/// Floats are identical when their bits are, so a NaN is identical to
/// itself.
pub fn identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Char(x), Value::Char(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x.to_bits() == y.to_bits(),
        (Value::BigInt(x), Value::BigInt(y)) => Arc::ptr_eq(x, y),
        (Value::String(x), Value::String(y)) => Arc::ptr_eq(x, y),
        (Value::Symbol(x), Value::Symbol(y)) => x.ptr_eq(y),
        (Value::List(x), Value::List(y)) => x.ptr_eq(y),
        (Value::Vector(x), Value::Vector(y)) => x.ptr_eq(y),
        (Value::Map(x), Value::Map(y)) => x.ptr_eq(y),
        (Value::Set(x), Value::Set(y)) => x.ptr_eq(y),
        (Value::Opaque(x), Value::Opaque(y)) => {
            std::ptr::addr_eq(Arc::as_ptr(x), Arc::as_ptr(y))
        }
        _ => false,
    }
}

/// Language-level equivalence.
pub fn equiv(a: &Value, b: &Value) -> bool {
    if identical(a, b) {
        return true;
    }
    if a.is_nil() {
        return false;
    }
    if numbers::is_number(a) && numbers::is_number(b) {
        return numbers::equal(a, b);
    }
    if a.is_collection() || b.is_collection() {
        return pcequiv(a, b);
    }
    a.natural_eq(b)
}

/// Collection equivalence: ask `a`, or `b` if `a` is not a collection.
pub fn pcequiv(a: &Value, b: &Value) -> bool {
    match a.as_equiv() {
        Some(coll) => coll.equiv_to(b),
        None => b.as_equiv().is_some_and(|coll| coll.equiv_to(a)),
    }
}

/// Identity or natural equality, with no numeric unification.
pub fn equals(a: &Value, b: &Value) -> bool {
    identical(a, b) || (!a.is_nil() && a.natural_eq(b))
}

// ============================================================================
// Specialised predicates
// ============================================================================

/// A comparison strategy chosen once from the shape of a seed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquivPred {
    /// Seed is nil: only nil matches
    Nil,
    /// Seed is a number: numeric tower equality
    Number,
    /// Seed is a string or symbol: natural equality
    Exact,
    /// Seed is a collection, or any other shape: full non-numeric dispatch
    Coll,
}

impl EquivPred {
    /// Pick the strategy for `seed`.
    pub fn for_seed(seed: &Value) -> Self {
        match seed {
            Value::Nil => EquivPred::Nil,
            Value::Int(_) | Value::BigInt(_) | Value::Float(_) => EquivPred::Number,
            Value::String(_) | Value::Symbol(_) => EquivPred::Exact,
            _ => EquivPred::Coll,
        }
    }

    /// Test `candidate` against the `seed` this strategy was chosen for.
    ///
    /// Agrees with `equiv(seed, candidate)` whenever the strategy came
    /// from [`EquivPred::for_seed`] on the same seed.
    pub fn equiv(self, seed: &Value, candidate: &Value) -> bool {
        match self {
            EquivPred::Nil => candidate.is_nil(),
            EquivPred::Number => {
                identical(seed, candidate)
                    || (numbers::is_number(candidate) && numbers::equal(seed, candidate))
            }
            EquivPred::Exact => identical(seed, candidate) || seed.natural_eq(candidate),
            EquivPred::Coll => {
                if identical(seed, candidate) {
                    true
                } else if seed.is_collection() || candidate.is_collection() {
                    pcequiv(seed, candidate)
                } else {
                    seed.natural_eq(candidate)
                }
            }
        }
    }
}

/// Build a predicate testing candidates for equivalence with `seed`.
pub fn equiv_pred(seed: &Value) -> impl Fn(&Value) -> bool + '_ {
    let strategy = EquivPred::for_seed(seed);
    move |candidate| strategy.equiv(seed, candidate)
}
