// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Persistent collections.
//!
//! Thin wrappers over `im` structures that implement the equivalence and
//! semantic-hash capabilities. Each wrapper caches its semantic hash the
//! first time it is asked for it; the contents are immutable, so the
//! cached value never goes stale.
//!
//! Lists and vectors are both sequential: they are equivalent to each
//! other when they hold equivalent elements in the same order, and both
//! hash with the sequence seed so that equivalence implies equal hashes.

use std::cmp::Ordering;
use std::sync::OnceLock;

use hasheq_murmur::unordered_hash_by;

use crate::capability::{Comparable, Equiv, HashEq};
use crate::compare::compare;
use crate::equiv::{equals, equiv};
use crate::error::{Error, Result};
use crate::hash::{hash, ordered_hash, product_hash, unordered_hash};
use crate::seeds::seeds;
use crate::value::Value;

// ============================================================================
// Sequential helpers
// ============================================================================

fn sequential_equiv(items: &im::Vector<Value>, other: &Value) -> bool {
    match other.as_sequential() {
        Some(theirs) => {
            items.ptr_eq(theirs)
                || (items.len() == theirs.len()
                    && items.iter().zip(theirs.iter()).all(|(a, b)| equiv(a, b)))
        }
        None => false,
    }
}

fn sequential_natural_eq(items: &im::Vector<Value>, other: &Value) -> bool {
    match other.as_sequential() {
        Some(theirs) => {
            items.len() == theirs.len()
                && items.iter().zip(theirs.iter()).all(|(a, b)| equals(a, b))
        }
        None => false,
    }
}

fn sequential_natural_hash(items: &im::Vector<Value>) -> i32 {
    items
        .iter()
        .fold(1i32, |h, v| h.wrapping_mul(31).wrapping_add(hash(v)))
}

// ============================================================================
// PersistentList
// ============================================================================

/// A persistent sequence.
#[derive(Clone, Default)]
pub struct PersistentList {
    items: im::Vector<Value>,
    hasheq: OnceLock<i32>,
}

impl PersistentList {
    pub fn items(&self) -> &im::Vector<Value> {
        &self.items
    }

    pub fn iter(&self) -> im::vector::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ptr_eq(&self, other: &PersistentList) -> bool {
        self.items.ptr_eq(&other.items)
    }

    pub fn natural_eq(&self, other: &Value) -> bool {
        sequential_natural_eq(&self.items, other)
    }

    pub fn natural_hash(&self) -> i32 {
        sequential_natural_hash(&self.items)
    }
}

impl FromIterator<Value> for PersistentList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        PersistentList {
            items: iter.into_iter().collect(),
            hasheq: OnceLock::new(),
        }
    }
}

impl Equiv for PersistentList {
    fn equiv_to(&self, other: &Value) -> bool {
        sequential_equiv(&self.items, other)
    }
}

impl HashEq for PersistentList {
    fn hasheq(&self) -> i32 {
        *self
            .hasheq
            .get_or_init(|| ordered_hash(self.items.iter(), seeds().seq))
    }
}

// ============================================================================
// PersistentVector
// ============================================================================

/// A persistent indexed vector.
#[derive(Clone, Default)]
pub struct PersistentVector {
    items: im::Vector<Value>,
    hasheq: OnceLock<i32>,
}

impl PersistentVector {
    pub fn items(&self) -> &im::Vector<Value> {
        &self.items
    }

    pub fn iter(&self) -> im::vector::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ptr_eq(&self, other: &PersistentVector) -> bool {
        self.items.ptr_eq(&other.items)
    }

    pub fn natural_eq(&self, other: &Value) -> bool {
        sequential_natural_eq(&self.items, other)
    }

    pub fn natural_hash(&self) -> i32 {
        sequential_natural_hash(&self.items)
    }
}

impl FromIterator<Value> for PersistentVector {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        PersistentVector {
            items: iter.into_iter().collect(),
            hasheq: OnceLock::new(),
        }
    }
}

impl Equiv for PersistentVector {
    fn equiv_to(&self, other: &Value) -> bool {
        sequential_equiv(&self.items, other)
    }
}

impl HashEq for PersistentVector {
    fn hasheq(&self) -> i32 {
        *self
            .hasheq
            .get_or_init(|| ordered_hash(self.items.iter(), seeds().seq))
    }
}

impl Comparable for PersistentVector {
    /// Shorter vectors sort first; equal lengths compare element-wise.
    fn compare_to(&self, other: &Value) -> Result<Ordering> {
        let Value::Vector(theirs) = other else {
            return Err(Error::not_orderable("vector", other.type_name()));
        };
        match self.len().cmp(&theirs.len()) {
            Ordering::Equal => {}
            unequal => return Ok(unequal),
        }
        for (a, b) in self.iter().zip(theirs.iter()) {
            match compare(a, b)? {
                Ordering::Equal => {}
                unequal => return Ok(unequal),
            }
        }
        Ok(Ordering::Equal)
    }
}

// ============================================================================
// PersistentMap
// ============================================================================

/// A persistent hash map keyed by semantic hash and equivalence.
#[derive(Clone, Default)]
pub struct PersistentMap {
    entries: im::HashMap<Value, Value>,
    hasheq: OnceLock<i32>,
}

impl PersistentMap {
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> im::hashmap::Iter<'_, Value, Value> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ptr_eq(&self, other: &PersistentMap) -> bool {
        self.entries.ptr_eq(&other.entries)
    }

    pub fn natural_eq(&self, other: &Value) -> bool {
        match other {
            Value::Map(theirs) => {
                self.len() == theirs.len()
                    && self
                        .iter()
                        .all(|(k, v)| theirs.get(k).is_some_and(|ov| equals(v, ov)))
            }
            _ => false,
        }
    }

    /// Sum of `hash(key) ^ hash(value)` over all entries.
    pub fn natural_hash(&self) -> i32 {
        self.iter()
            .fold(0i32, |h, (k, v)| h.wrapping_add(hash(k) ^ hash(v)))
    }
}

impl FromIterator<(Value, Value)> for PersistentMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        PersistentMap {
            entries: iter.into_iter().collect(),
            hasheq: OnceLock::new(),
        }
    }
}

impl Equiv for PersistentMap {
    fn equiv_to(&self, other: &Value) -> bool {
        match other {
            Value::Map(theirs) => {
                self.ptr_eq(theirs)
                    || (self.len() == theirs.len()
                        && self
                            .iter()
                            .all(|(k, v)| theirs.get(k).is_some_and(|ov| equiv(v, ov))))
            }
            _ => false,
        }
    }
}

impl HashEq for PersistentMap {
    /// Unordered hash of the entries, each hashed like the vector `[k v]`.
    fn hasheq(&self) -> i32 {
        *self.hasheq.get_or_init(|| {
            let seeds = seeds();
            unordered_hash_by(self.entries.iter(), seeds.map, |(k, v)| {
                product_hash(&[k, v], seeds.seq)
            })
        })
    }
}

// ============================================================================
// PersistentSet
// ============================================================================

/// A persistent hash set keyed by semantic hash and equivalence.
#[derive(Clone, Default)]
pub struct PersistentSet {
    items: im::HashSet<Value>,
    hasheq: OnceLock<i32>,
}

impl PersistentSet {
    pub fn contains(&self, value: &Value) -> bool {
        self.items.contains(value)
    }

    pub fn iter(&self) -> im::hashset::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ptr_eq(&self, other: &PersistentSet) -> bool {
        self.items.ptr_eq(&other.items)
    }

    pub fn natural_eq(&self, other: &Value) -> bool {
        match other {
            Value::Set(theirs) => {
                self.len() == theirs.len() && self.iter().all(|v| theirs.contains(v))
            }
            _ => false,
        }
    }

    pub fn natural_hash(&self) -> i32 {
        self.iter().fold(0i32, |h, v| h.wrapping_add(hash(v)))
    }
}

impl FromIterator<Value> for PersistentSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        PersistentSet {
            items: iter.into_iter().collect(),
            hasheq: OnceLock::new(),
        }
    }
}

impl Equiv for PersistentSet {
    fn equiv_to(&self, other: &Value) -> bool {
        match other {
            Value::Set(theirs) => {
                self.ptr_eq(theirs)
                    || (self.len() == theirs.len() && self.iter().all(|v| theirs.contains(v)))
            }
            _ => false,
        }
    }
}

impl HashEq for PersistentSet {
    fn hasheq(&self) -> i32 {
        *self
            .hasheq
            .get_or_init(|| unordered_hash(self.items.iter(), seeds().set))
    }
}
