// hasheq-murmur - 32-bit mixing and aggregate hashing
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Aggregate hashers.
//!
//! Each hasher walks its input once, mixing per-element hashes produced by
//! a caller-supplied callback, and finalizes with the element count.
//!
//! - [`ordered_hash_by`]: sequences and vectors; depends on traversal order.
//! - [`unordered_hash_by`]: sets and maps; invariant under permutation.
//! - [`array_hash_by`]: raw slices and fixed-arity products.
//! - [`string_hash`]: UTF-16 code units packed two per block.

use crate::mix::{finalize, mix, mix_last};

/// Seed for [`string_hash`] when hashing runtime strings.
pub const STRING_SEED: i32 = 0xf7ca_7fd2_u32 as i32;

/// Hash a sequence of elements where order matters.
pub fn ordered_hash_by<I, F>(items: I, seed: i32, mut hash_one: F) -> i32
where
    I: IntoIterator,
    F: FnMut(I::Item) -> i32,
{
    let mut n: i32 = 0;
    let mut h = seed;
    for item in items {
        h = mix(h, hash_one(item));
        n = n.wrapping_add(1);
    }
    finalize(h, n)
}

/// Hash a collection of elements where order does not matter.
///
/// Keeps a wrapping sum, an XOR and a product of the non-zero element
/// hashes. All three are commutative, so any permutation of the same
/// multiset of element hashes produces the same result.
pub fn unordered_hash_by<I, F>(items: I, seed: i32, mut hash_one: F) -> i32
where
    I: IntoIterator,
    F: FnMut(I::Item) -> i32,
{
    let mut sum: i32 = 0;
    let mut xor: i32 = 0;
    let mut product: i32 = 1;
    let mut n: i32 = 0;
    for item in items {
        let h = hash_one(item);
        sum = sum.wrapping_add(h);
        xor ^= h;
        if h != 0 {
            product = product.wrapping_mul(h);
        }
        n = n.wrapping_add(1);
    }
    let mut h = seed;
    h = mix(h, sum);
    h = mix(h, xor);
    h = mix_last(h, product);
    finalize(h, n)
}

/// Hash a slice of elements in index order.
pub fn array_hash_by<T, F>(items: &[T], seed: i32, mut hash_one: F) -> i32
where
    F: FnMut(&T) -> i32,
{
    let mut h = seed;
    for item in items {
        h = mix(h, hash_one(item));
    }
    finalize(h, items.len() as i32)
}

/// Hash a string as a sequence of 16-bit code units.
///
/// Consecutive pairs of units are packed into one 32-bit block; an odd
/// trailing unit is folded in with [`mix_last`]. The empty string hashes
/// to 0.
pub fn string_hash(s: &str, seed: i32) -> i32 {
    if s.is_empty() {
        return 0;
    }
    let mut units = s.encode_utf16();
    let mut h = seed;
    let mut len: i32 = 0;
    loop {
        match (units.next(), units.next()) {
            (Some(hi), Some(lo)) => {
                h = mix(h, ((hi as i32) << 16).wrapping_add(lo as i32));
                len = len.wrapping_add(2);
            }
            (Some(last), None) => {
                h = mix_last(h, last as i32);
                len = len.wrapping_add(1);
                break;
            }
            _ => break,
        }
    }
    finalize(h, len)
}

/// Murmur3 hash of a 64-bit integer, low half first. Zero hashes to zero.
pub const fn hash_long(input: i64) -> i32 {
    if input == 0 {
        return 0;
    }
    let low = input as i32;
    let high = ((input as u64) >> 32) as i32;
    let h = mix(0, low);
    let h = mix(h, high);
    finalize(h, 8)
}

/// Boost-style combination of a running seed with another hash.
pub const fn hash_combine(seed: i32, hash: i32) -> i32 {
    seed ^ hash
        .wrapping_add(0x9e37_79b9_u32 as i32)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}
