// hasheq-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for hasheq-core integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`Handle`] - host object with only natural equality and hashing
//! - [`Version`] - host object with a natural ordering
//! - [`Interval`] - host object with structural equivalence and a semantic hash
//! - [`twin`] - an equivalent value built from different representations
//! - [`arb_value`] - proptest strategy over nested values

#![allow(dead_code)]

use std::any::Any;
use std::cmp::Ordering;

use num_bigint::BigInt;
use proptest::prelude::*;

pub use hasheq_core::{
    Comparable, Equiv, Error, HashEq, HostObject, Symbol, Value, compare, equiv, hash_combine,
    hasheq,
};

// =============================================================================
// Host objects
// =============================================================================

/// An opaque resource handle. Equal by id, never orderable.
#[derive(Debug)]
pub struct Handle(pub u64);

impl HostObject for Handle {
    fn type_name(&self) -> &'static str {
        "handle"
    }

    fn natural_eq(&self, other: &dyn HostObject) -> bool {
        other
            .as_any()
            .downcast_ref::<Handle>()
            .is_some_and(|h| h.0 == self.0)
    }

    fn natural_hash(&self) -> i32 {
        (self.0 ^ (self.0 >> 32)) as i32
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A `major.minor` version with a natural ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(pub u32, pub u32);

impl HostObject for Version {
    fn type_name(&self) -> &'static str {
        "version"
    }

    fn natural_eq(&self, other: &dyn HostObject) -> bool {
        other.as_any().downcast_ref::<Version>() == Some(self)
    }

    fn natural_hash(&self) -> i32 {
        (self.0 as i32).wrapping_mul(31).wrapping_add(self.1 as i32)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_comparable(&self) -> Option<&dyn Comparable> {
        Some(self)
    }
}

impl Comparable for Version {
    fn compare_to(&self, other: &Value) -> Result<Ordering, Error> {
        match other.downcast_ref::<Version>() {
            Some(theirs) => Ok(self.cmp(theirs)),
            None => Err(Error::not_orderable("version", other.type_name())),
        }
    }
}

/// A closed interval whose endpoints are compared with `equiv`, so
/// `[1, 2]` and `[1N, 2]` are the same interval.
#[derive(Debug)]
pub struct Interval {
    pub lo: Value,
    pub hi: Value,
}

impl Interval {
    pub fn new(lo: impl Into<Value>, hi: impl Into<Value>) -> Self {
        Interval {
            lo: lo.into(),
            hi: hi.into(),
        }
    }
}

impl HostObject for Interval {
    fn type_name(&self) -> &'static str {
        "interval"
    }

    fn natural_eq(&self, other: &dyn HostObject) -> bool {
        other
            .as_any()
            .downcast_ref::<Interval>()
            .is_some_and(|i| self.lo.natural_eq(&i.lo) && self.hi.natural_eq(&i.hi))
    }

    fn natural_hash(&self) -> i32 {
        self.lo.natural_hash().wrapping_mul(31) ^ self.hi.natural_hash()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_equiv(&self) -> Option<&dyn Equiv> {
        Some(self)
    }

    fn as_hasheq(&self) -> Option<&dyn HashEq> {
        Some(self)
    }
}

impl Equiv for Interval {
    fn equiv_to(&self, other: &Value) -> bool {
        other
            .downcast_ref::<Interval>()
            .is_some_and(|i| equiv(&self.lo, &i.lo) && equiv(&self.hi, &i.hi))
    }
}

impl HashEq for Interval {
    fn hasheq(&self) -> i32 {
        hash_combine(hasheq(&self.lo), hasheq(&self.hi))
    }
}

// =============================================================================
// Representation twins
// =============================================================================

/// Rebuild `v` with every integer widened to a big integer and every list
/// swapped for a vector (and vice versa). The result is equivalent to `v`
/// but shares none of its structure.
pub fn twin(v: &Value) -> Value {
    match v {
        Value::Int(n) => Value::bigint(BigInt::from(*n)),
        Value::String(s) => Value::string(s.to_string()),
        Value::List(l) => Value::vector(l.iter().map(twin).collect()),
        Value::Vector(items) => Value::list(items.iter().map(twin).collect()),
        Value::Map(m) => Value::map(m.iter().map(|(k, v)| (twin(k), twin(v))).collect()),
        Value::Set(s) => Value::set(s.iter().map(twin).collect()),
        other => other.clone(),
    }
}

// =============================================================================
// Strategies
// =============================================================================

/// Scalars, excluding NaN (which is only equivalent to itself by identity).
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::bool),
        any::<char>().prop_map(Value::char),
        any::<i64>().prop_map(Value::int),
        any::<i64>().prop_map(|n| Value::bigint(BigInt::from(n) * BigInt::from(1_000_003))),
        any::<f64>()
            .prop_filter("not NaN", |f| !f.is_nan())
            .prop_map(Value::float),
        "[a-z]{0,8}".prop_map(Value::string),
        "[a-z]{1,6}".prop_map(|s| Value::symbol(Symbol::new(&s))),
    ]
}

/// Nested values up to a few levels deep.
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::list),
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::vector),
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::set),
            prop::collection::vec((inner.clone(), inner), 0..4).prop_map(Value::map),
        ]
    })
}
