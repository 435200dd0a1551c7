// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for the value kernel.
//!
//! Equivalence and hashing are total, so the only errors here come from
//! ordering and from numeric primitives handed something that isn't a
//! number.

use std::fmt;

/// Result type for kernel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while comparing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two values with no natural ordering between them
    NotOrderable {
        left: &'static str,
        right: &'static str,
    },
    /// Type error - wrong type for an operation
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotOrderable { left, right } => {
                write!(f, "Cannot compare {} with {}", left, right)
            }
            Error::TypeError {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type error: expected {}, got {}", expected, got)
                }
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create a not-orderable error from the two operand type names.
    pub fn not_orderable(left: &'static str, right: &'static str) -> Self {
        Error::NotOrderable { left, right }
    }

    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::TypeError {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Returns true if this is an ordering type mismatch.
    pub fn is_not_orderable(&self) -> bool {
        matches!(self, Error::NotOrderable { .. })
    }
}
