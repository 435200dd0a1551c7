// hasheq-murmur - 32-bit mixing and aggregate hashing
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Bit-mixing primitives.
//!
//! These are the four building blocks every aggregate hash is composed
//! from. They are pure `const fn`s; no branch depends on the input value.

const C1: i32 = 0xcc9e_2d51_u32 as i32;
const C2: i32 = 0x1b87_3593;
const N1: i32 = 0xe654_6b64_u32 as i32;
const F1: i32 = 0x85eb_ca6b_u32 as i32;
const F2: i32 = 0xc2b2_ae35_u32 as i32;

/// Logical (unsigned) right shift on an `i32`.
#[inline]
const fn ushr(h: i32, n: u32) -> i32 {
    ((h as u32) >> n) as i32
}

/// Fold one block of data into `hash` without further mixing the result.
///
/// Cheaper than [`mix`]; suitable for the last block because
/// [`finalize`] mixes thoroughly anyway.
#[inline]
pub const fn mix_last(hash: i32, data: i32) -> i32 {
    let k = data.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
    hash ^ k
}

/// Mix one block of data into an intermediate hash value.
#[inline]
pub const fn mix(hash: i32, data: i32) -> i32 {
    mix_last(hash, data)
        .rotate_left(13)
        .wrapping_mul(5)
        .wrapping_add(N1)
}

/// Force every output bit to depend on every input bit.
#[inline]
pub const fn avalanche(hash: i32) -> i32 {
    let mut h = hash;
    h ^= ushr(h, 16);
    h = h.wrapping_mul(F1);
    h ^= ushr(h, 13);
    h = h.wrapping_mul(F2);
    h ^= ushr(h, 16);
    h
}

/// Incorporate the element count and avalanche.
#[inline]
pub const fn finalize(hash: i32, length: i32) -> i32 {
    avalanche(hash ^ length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avalanche_fixed_points() {
        assert_eq!(avalanche(0), 0);
        assert_eq!(avalanche(1), 1_364_076_727);
    }

    #[test]
    fn test_mix_known_values() {
        assert_eq!(mix_last(0, 1), -1_017_931_171);
        assert_eq!(mix(0, 1), 651_101_558);
    }

    #[test]
    fn test_finalize_uses_length() {
        assert_ne!(finalize(17, 1), finalize(17, 2));
        assert_eq!(finalize(17, 0), avalanche(17));
    }

    #[test]
    fn test_ushr_is_logical() {
        assert_eq!(ushr(-1, 28), 0xf);
        assert_eq!(ushr(i32::MIN, 31), 1);
    }
}
