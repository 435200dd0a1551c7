// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Capability traits consulted by the kernels.
//!
//! A value advertises what it can do through [`Value::as_equiv`],
//! [`Value::as_hasheq`] and [`Value::as_comparable`]. Built-in variants
//! answer statically; opaque host objects answer through the optional
//! hooks on [`HostObject`].
//!
//! [`Value::as_equiv`]: crate::Value::as_equiv
//! [`Value::as_hasheq`]: crate::Value::as_hasheq
//! [`Value::as_comparable`]: crate::Value::as_comparable

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;
use crate::value::Value;

/// Structural equivalence, implemented by collections.
pub trait Equiv {
    /// Element-wise equivalence against an arbitrary value.
    fn equiv_to(&self, other: &Value) -> bool;
}

/// A semantic hash distinct from the natural hash.
pub trait HashEq {
    fn hasheq(&self) -> i32;
}

/// Natural ordering against another value.
///
/// Implementations return [`Error::NotOrderable`] when `other` is of a type
/// they cannot be ordered against.
///
/// [`Error::NotOrderable`]: crate::Error::NotOrderable
pub trait Comparable {
    fn compare_to(&self, other: &Value) -> Result<Ordering>;
}

/// An opaque value owned by the host.
///
/// Only natural equality and hashing are required. The capability hooks
/// default to `None`; a host type that behaves like a collection or has a
/// natural order overrides the relevant hook.
pub trait HostObject: fmt::Debug + Send + Sync {
    /// Type description used in error messages.
    fn type_name(&self) -> &'static str;

    /// Natural equality against another host object.
    fn natural_eq(&self, other: &dyn HostObject) -> bool;

    fn natural_hash(&self) -> i32;

    fn as_any(&self) -> &dyn Any;

    fn as_equiv(&self) -> Option<&dyn Equiv> {
        None
    }

    fn as_hasheq(&self) -> Option<&dyn HashEq> {
        None
    }

    fn as_comparable(&self) -> Option<&dyn Comparable> {
        None
    }
}
