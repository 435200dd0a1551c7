// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type.
//!
//! `Value` is a closed tagged union over every kind of value the kernel
//! classifies. Values are immutable, cheap to clone and `Send + Sync`.
//!
//! `Value`'s `PartialEq` is [`equiv`] and its `Hash` feeds [`hasheq`], so
//! any std or `im` hash container keyed on `Value` buckets and resolves
//! collisions through the kernel.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use num_bigint::BigInt;

use crate::capability::{Comparable, Equiv, HashEq, HostObject};
use crate::coll::{PersistentList, PersistentMap, PersistentSet, PersistentVector};
use crate::equiv::equiv;
use crate::error::{Error, Result};
use crate::hash::{
    hasheq, natural_bigint_hash, natural_double_hash, natural_long_hash, natural_str_hash,
    string_hasheq,
};
use crate::numbers;
use crate::symbol::Symbol;

/// The core value type.
#[derive(Clone)]
pub enum Value {
    /// The nil value, representing nothing/absence
    Nil,
    Bool(bool),
    /// Unicode character
    Char(char),
    /// 64-bit signed integer
    Int(i64),
    /// Arbitrary-precision integer
    BigInt(Arc<BigInt>),
    /// 64-bit floating point number
    Float(f64),
    /// Immutable string
    String(Arc<str>),
    Symbol(Symbol),
    /// Sequence (persistent list)
    List(PersistentList),
    Vector(PersistentVector),
    Map(PersistentMap),
    Set(PersistentSet),
    /// Host object the kernel knows only through its capabilities
    Opaque(Arc<dyn HostObject>),
}

// ============================================================================
// Constructors and classification
// ============================================================================

impl Value {
    pub fn nil() -> Self {
        Value::Nil
    }

    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn char(c: char) -> Self {
        Value::Char(c)
    }

    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create an arbitrary-precision integer. Small values are not
    /// narrowed; `Int(3)` and `BigInt(3)` are distinct but equivalent.
    pub fn bigint(n: BigInt) -> Self {
        Value::BigInt(Arc::new(n))
    }

    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn symbol(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }

    pub fn empty_list() -> Self {
        Value::List(PersistentList::default())
    }

    pub fn list(elements: Vec<Value>) -> Self {
        Value::List(elements.into_iter().collect())
    }

    pub fn empty_vector() -> Self {
        Value::Vector(PersistentVector::default())
    }

    pub fn vector(elements: Vec<Value>) -> Self {
        Value::Vector(elements.into_iter().collect())
    }

    pub fn empty_map() -> Self {
        Value::Map(PersistentMap::default())
    }

    /// Create a map from key-value pairs; later pairs win.
    pub fn map(pairs: Vec<(Value, Value)>) -> Self {
        Value::Map(pairs.into_iter().collect())
    }

    pub fn empty_set() -> Self {
        Value::Set(PersistentSet::default())
    }

    pub fn set(elements: Vec<Value>) -> Self {
        Value::Set(elements.into_iter().collect())
    }

    /// Wrap a host object.
    pub fn opaque(obj: impl HostObject + 'static) -> Self {
        Value::Opaque(Arc::new(obj))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_number(&self) -> bool {
        numbers::is_number(self)
    }

    pub fn is_integer(&self) -> bool {
        numbers::is_integer(self)
    }

    /// True if the value carries the structural equivalence capability.
    pub fn is_collection(&self) -> bool {
        self.as_equiv().is_some()
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Int(_) => "int",
            Value::BigInt(_) => "bigint",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Vector(_) => "vector",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::Opaque(o) => o.type_name(),
        }
    }

    /// Elements of a sequential collection (list or vector).
    pub fn as_sequential(&self) -> Option<&im::Vector<Value>> {
        match self {
            Value::List(l) => Some(l.items()),
            Value::Vector(v) => Some(v.items()),
            _ => None,
        }
    }

    /// Downcast an opaque value to its host type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Value::Opaque(o) => o.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

// ============================================================================
// Capability lookup
// ============================================================================

impl Value {
    pub fn as_equiv(&self) -> Option<&dyn Equiv> {
        match self {
            Value::List(l) => Some(l),
            Value::Vector(v) => Some(v),
            Value::Map(m) => Some(m),
            Value::Set(s) => Some(s),
            Value::Opaque(o) => o.as_equiv(),
            _ => None,
        }
    }

    pub fn as_hasheq(&self) -> Option<&dyn HashEq> {
        match self {
            Value::String(s) => Some(s),
            Value::Symbol(sym) => Some(sym),
            Value::List(l) => Some(l),
            Value::Vector(v) => Some(v),
            Value::Map(m) => Some(m),
            Value::Set(s) => Some(s),
            Value::Opaque(o) => o.as_hasheq(),
            _ => None,
        }
    }

    /// Natural ordering capability. Numbers are ordered by the numeric
    /// tower instead and answer `None` here.
    pub fn as_comparable(&self) -> Option<&dyn Comparable> {
        match self {
            Value::Bool(b) => Some(b),
            Value::Char(c) => Some(c),
            Value::String(s) => Some(s),
            Value::Symbol(sym) => Some(sym),
            Value::Vector(v) => Some(v),
            Value::Opaque(o) => o.as_comparable(),
            _ => None,
        }
    }
}

// ============================================================================
// Natural equality and hashing
// ============================================================================

impl Value {
    /// Host equality: no numeric unification, exact variant match.
    pub fn natural_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => {
                natural_double_bits(*a) == natural_double_bits(*b)
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), _) => a.natural_eq(other),
            (Value::Vector(a), _) => a.natural_eq(other),
            (Value::Map(a), _) => a.natural_eq(other),
            (Value::Set(a), _) => a.natural_eq(other),
            (Value::Opaque(a), Value::Opaque(b)) => a.natural_eq(&**b),
            _ => false,
        }
    }

    /// Host hash code. `Nil` hashes to 0.
    pub fn natural_hash(&self) -> i32 {
        match self {
            Value::Nil => 0,
            Value::Bool(true) => 1231,
            Value::Bool(false) => 1237,
            Value::Char(c) => *c as i32,
            Value::Int(n) => natural_long_hash(*n),
            Value::BigInt(n) => natural_bigint_hash(n),
            Value::Float(f) => natural_double_hash(*f),
            Value::String(s) => natural_str_hash(s),
            Value::Symbol(sym) => sym.natural_hash(),
            Value::List(l) => l.natural_hash(),
            Value::Vector(v) => v.natural_hash(),
            Value::Map(m) => m.natural_hash(),
            Value::Set(s) => s.natural_hash(),
            Value::Opaque(o) => o.natural_hash(),
        }
    }
}

/// Canonical bits: every NaN is the same NaN, `0.0` and `-0.0` differ.
fn natural_double_bits(f: f64) -> u64 {
    if f.is_nan() {
        0x7ff8_0000_0000_0000
    } else {
        f.to_bits()
    }
}

// ============================================================================
// Natural ordering of scalar payloads
// ============================================================================

impl Comparable for bool {
    fn compare_to(&self, other: &Value) -> Result<Ordering> {
        match other {
            Value::Bool(b) => Ok(self.cmp(b)),
            _ => Err(Error::not_orderable("bool", other.type_name())),
        }
    }
}

impl Comparable for char {
    fn compare_to(&self, other: &Value) -> Result<Ordering> {
        match other {
            Value::Char(c) => Ok(self.cmp(c)),
            _ => Err(Error::not_orderable("char", other.type_name())),
        }
    }
}

impl Comparable for Arc<str> {
    /// Lexicographic over UTF-16 code units, like host strings.
    fn compare_to(&self, other: &Value) -> Result<Ordering> {
        match other {
            Value::String(s) => Ok(self.encode_utf16().cmp(s.encode_utf16())),
            _ => Err(Error::not_orderable("string", other.type_name())),
        }
    }
}

impl HashEq for Arc<str> {
    fn hasheq(&self) -> i32 {
        string_hasheq(self)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::bigint(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Nil, Into::into)
    }
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "\\{}", format_char(*c)),
            Value::Int(n) => write!(f, "{}", n),
            Value::BigInt(n) => write!(f, "{}N", n),
            Value::Float(n) => {
                if n.is_nan() {
                    write!(f, "##NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "##Inf")
                    } else {
                        write!(f, "##-Inf")
                    }
                } else if n.fract() == 0.0 {
                    write!(f, "{}.0", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::List(l) => write_joined(f, "(", l.iter(), ")"),
            Value::Vector(v) => write_joined(f, "[", v.iter(), "]"),
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Set(s) => write_joined(f, "#{", s.iter(), "}"),
            Value::Opaque(o) => write!(f, "#<{}>", o.type_name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: impl Iterator<Item = &'a Value>,
    close: &str,
) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

fn format_char(c: char) -> String {
    match c {
        '\n' => "newline".to_string(),
        ' ' => "space".to_string(),
        '\t' => "tab".to_string(),
        '\r' => "return".to_string(),
        '\x08' => "backspace".to_string(),
        '\x0C' => "formfeed".to_string(),
        _ => c.to_string(),
    }
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}

// ============================================================================
// Equality and hashing (for use as map keys and set elements)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        equiv(self, other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(hasheq(self));
    }
}

// ============================================================================
// Tests
// ============================================================================
