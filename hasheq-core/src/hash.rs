// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The two hash universes.
//!
//! [`hash`] is a value's natural hash: what the host would compute without
//! knowing about the runtime's equivalence relation. [`hasheq`] is the
//! semantic hash every hash-based collection buckets on; it agrees with
//! [`equiv`](crate::equiv) across representations.
//!
//! The natural hashes follow host conventions so that values round-trip
//! with the same hash codes they would have in the host runtime.

use hasheq_murmur::{
    STRING_SEED, array_hash_by, ordered_hash_by, string_hash, unordered_hash_by,
};
use num_bigint::{BigInt, Sign};

use crate::numbers;
use crate::value::Value;

/// Natural hash of a value. `hash(nil) == 0`.
pub fn hash(v: &Value) -> i32 {
    v.natural_hash()
}

/// Semantic hash of a value, consistent with equivalence.
///
/// Dispatch order: nil, then the value's own semantic-hash capability,
/// then the numeric tower, then the natural hash.
pub fn hasheq(v: &Value) -> i32 {
    if v.is_nil() {
        return 0;
    }
    if let Some(h) = v.as_hasheq() {
        return h.hasheq();
    }
    if numbers::is_number(v) {
        return numbers::hasheq(v);
    }
    v.natural_hash()
}

/// Semantic hash of a string.
pub fn string_hasheq(s: &str) -> i32 {
    string_hash(s, STRING_SEED)
}

/// Order-sensitive hash of a sequence of values.
pub fn ordered_hash<'a, I>(items: I, seed: i32) -> i32
where
    I: IntoIterator<Item = &'a Value>,
{
    ordered_hash_by(items, seed, hasheq)
}

/// Order-insensitive hash of a collection of values.
pub fn unordered_hash<'a, I>(items: I, seed: i32) -> i32
where
    I: IntoIterator<Item = &'a Value>,
{
    unordered_hash_by(items, seed, hasheq)
}

/// Hash of a raw block of values, in index order.
pub fn array_hash(items: &[Value], seed: i32) -> i32 {
    array_hash_by(items, seed, hasheq)
}

/// Hash of a fixed-arity product such as a map entry.
pub fn product_hash(fields: &[&Value], seed: i32) -> i32 {
    array_hash_by(fields, seed, |v| hasheq(v))
}

// ============================================================================
// Natural hashes
// ============================================================================

/// Host string hash: 31-polynomial over UTF-16 code units.
pub fn natural_str_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Host 64-bit integer hash: high half XOR low half.
pub fn natural_long_hash(n: i64) -> i32 {
    (n ^ ((n as u64) >> 32) as i64) as i32
}

/// Host double hash over canonical bits (every NaN hashes alike).
pub fn natural_double_hash(f: f64) -> i32 {
    let bits = if f.is_nan() {
        0x7ff8_0000_0000_0000_u64
    } else {
        f.to_bits()
    };
    (bits ^ (bits >> 32)) as i32
}

/// Host big integer hash: 31-polynomial over big-endian 32-bit words,
/// times the sign.
pub fn natural_bigint_hash(n: &BigInt) -> i32 {
    let (sign, digits) = n.to_u32_digits();
    let magnitude = digits
        .iter()
        .rev()
        .fold(0i32, |h, word| h.wrapping_mul(31).wrapping_add(*word as i32));
    match sign {
        Sign::Minus => magnitude.wrapping_neg(),
        Sign::NoSign => 0,
        Sign::Plus => magnitude,
    }
}
