// hasheq-murmur - 32-bit mixing and aggregate hashing
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # hasheq-murmur
//!
//! MurmurHash3-style 32-bit mixing primitives and the aggregate hashers
//! built on them. Nothing here knows about runtime values: aggregate hashers
//! take a callback that hashes one element, so the value kernel decides what
//! "the hash of an element" means.
//!
//! All arithmetic is 32-bit wrapping and hashes are `i32`, matching the
//! host convention the runtime's hash codes are compared against.

pub mod aggregate;
pub mod mix;

pub use aggregate::{
    STRING_SEED, array_hash_by, hash_combine, hash_long, ordered_hash_by, string_hash,
    unordered_hash_by,
};
pub use mix::{avalanche, finalize, mix, mix_last};
