// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Aggregate hash seeds.
//!
//! Each seed is the semantic hash of its category name, computed once on
//! first use and read-only afterwards. Deriving them through [`hasheq`]
//! keeps them in step with the string hasher.

use std::sync::OnceLock;

use crate::hash::hasheq;
use crate::value::Value;

/// Seeds distinguishing the sequence, map and set hash families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashSeeds {
    pub seq: i32,
    pub map: i32,
    pub set: i32,
}

static SEEDS: OnceLock<HashSeeds> = OnceLock::new();

/// The process-wide seeds.
pub fn seeds() -> &'static HashSeeds {
    SEEDS.get_or_init(|| HashSeeds {
        seq: hasheq(&Value::string("Seq")),
        map: hasheq(&Value::string("Map")),
        set: hasheq(&Value::string("Set")),
    })
}
