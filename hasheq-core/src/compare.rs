// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The ordering kernel.
//!
//! `nil` sorts before everything else. Numbers are ordered by the numeric
//! tower across representations. Anything else must carry the natural
//! ordering capability; comparing values without one is an error rather
//! than a silent answer.

use std::cmp::Ordering;

use crate::equiv::identical;
use crate::error::{Error, Result};
use crate::numbers;
use crate::value::Value;

/// Total-order comparison of two values.
pub fn compare(a: &Value, b: &Value) -> Result<Ordering> {
    if identical(a, b) {
        return Ok(Ordering::Equal);
    }
    match (a, b) {
        (Value::Nil, _) => Ok(Ordering::Less),
        (_, Value::Nil) => Ok(Ordering::Greater),
        _ if numbers::is_number(a) => {
            if numbers::is_number(b) {
                numbers::compare(a, b)
            } else {
                Err(Error::not_orderable(a.type_name(), b.type_name()))
            }
        }
        _ => match a.as_comparable() {
            Some(ord) => ord.compare_to(b),
            None => Err(Error::not_orderable(a.type_name(), b.type_name())),
        },
    }
}

/// Sort values in place by [`compare`].
///
/// Stops comparing at the first unorderable pair and reports it; the
/// slice is left in an unspecified (but valid) order in that case.
pub fn sort(values: &mut [Value]) -> Result<()> {
    let mut failure = None;
    values.sort_by(|a, b| {
        if failure.is_some() {
            return Ordering::Equal;
        }
        compare(a, b).unwrap_or_else(|err| {
            failure = Some(err);
            Ordering::Equal
        })
    });
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
