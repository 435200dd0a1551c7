// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Numeric tower primitives consumed by the kernels.
//!
//! Numbers fall into two categories: integers (`Int`, `BigInt`) and
//! floating point (`Float`). Equality never crosses categories, so
//! `(= 1 1.0)` is false, but integers compare equal regardless of
//! representation and hash identically through [`hash_long`].

use std::cmp::Ordering;

use hasheq_murmur::hash_long;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::hash::{natural_bigint_hash, natural_double_hash};
use crate::value::Value;

/// Returns true for every numeric variant.
pub fn is_number(v: &Value) -> bool {
    matches!(v, Value::Int(_) | Value::BigInt(_) | Value::Float(_))
}

/// Returns true for fixed-width and arbitrary-precision integers.
pub fn is_integer(v: &Value) -> bool {
    matches!(v, Value::Int(_) | Value::BigInt(_))
}

/// Cross-representation numeric equality.
pub fn equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Int(x), Value::BigInt(y)) | (Value::BigInt(y), Value::Int(x)) => {
            y.to_i64() == Some(*x)
        }
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        _ => false,
    }
}

/// Cross-representation numeric comparison.
///
/// Integers compare exactly. Anything involving a float is compared as
/// `f64`; NaN is neither less nor greater than anything, so it compares
/// as equal.
pub fn compare(a: &Value, b: &Value) -> Result<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(x.cmp(y)),
        (Value::Int(x), Value::BigInt(y)) => Ok(BigInt::from(*x).cmp(y)),
        (Value::BigInt(x), Value::Int(y)) => Ok((**x).cmp(&BigInt::from(*y))),
        (Value::BigInt(x), Value::BigInt(y)) => Ok(x.cmp(y)),
        _ => {
            let x = to_f64(a)?;
            let y = to_f64(b)?;
            Ok(x.partial_cmp(&y).unwrap_or(Ordering::Equal))
        }
    }
}

/// Unified numeric hash.
///
/// Integers that fit in 64 bits hash via [`hash_long`] whatever their
/// representation. `-0.0` is folded onto `0.0` since the two are equal.
pub fn hasheq(v: &Value) -> i32 {
    match v {
        Value::Int(n) => hash_long(*n),
        Value::BigInt(n) => match n.to_i64() {
            Some(small) => hash_long(small),
            None => natural_bigint_hash(n),
        },
        Value::Float(f) if *f == 0.0 => 0,
        Value::Float(f) => natural_double_hash(*f),
        other => other.natural_hash(),
    }
}

fn to_f64(v: &Value) -> Result<f64> {
    match v {
        Value::Int(n) => Ok(*n as f64),
        Value::BigInt(n) => Ok(n.to_f64().unwrap_or(f64::NAN)),
        Value::Float(f) => Ok(*f),
        other => Err(Error::type_error_in(
            "compare",
            "number",
            other.type_name(),
        )),
    }
}
