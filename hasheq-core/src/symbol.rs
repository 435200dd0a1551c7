// hasheq-core - Value equivalence, hashing and ordering kernel
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are identifiers that may be optionally namespaced.
//!
//! # Interning
//!
//! Symbols are interned in a global table, so two symbols with the same
//! namespace and name share one allocation. Equality is a pointer
//! comparison, which makes symbols a cheap "exact" shape for the
//! equivalence predicate factory.
//!
//! Interned symbols are never deallocated.
//!
//! # Hashing
//!
//! A symbol's semantic hash combines the Murmur string hash of its name
//! with the natural hash of its namespace. It is computed at intern time
//! and stored alongside the strings.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use hasheq_murmur::{STRING_SEED, hash_combine, string_hash};

use crate::capability::{Comparable, HashEq};
use crate::error::{Error, Result};
use crate::hash::natural_str_hash;
use crate::value::Value;

/// A symbol with optional namespace.
#[derive(Clone)]
pub struct Symbol {
    inner: Arc<SymbolInner>,
}

#[derive(Debug)]
struct SymbolInner {
    namespace: Option<Arc<str>>,
    name: Arc<str>,
    hasheq: i32,
    natural_hash: i32,
}

/// Global symbol interner
static SYMBOL_INTERNER: OnceLock<Mutex<SymbolInterner>> = OnceLock::new();

/// Key type for the interner: (namespace, name)
type InternerKey = (Option<Arc<str>>, Arc<str>);

struct SymbolInterner {
    symbols: HashMap<InternerKey, Arc<SymbolInner>>,
    /// Interned strings for reuse
    strings: HashMap<String, Arc<str>>,
}

impl SymbolInterner {
    fn new() -> Self {
        SymbolInterner {
            symbols: HashMap::new(),
            strings: HashMap::new(),
        }
    }

    fn intern_string(&mut self, s: &str) -> Arc<str> {
        if let Some(interned) = self.strings.get(s) {
            Arc::clone(interned)
        } else {
            let interned: Arc<str> = Arc::from(s);
            self.strings.insert(s.to_string(), Arc::clone(&interned));
            interned
        }
    }

    fn intern(&mut self, namespace: Option<&str>, name: &str) -> Arc<SymbolInner> {
        let ns = namespace.map(|s| self.intern_string(s));
        let n = self.intern_string(name);

        let key = (ns.clone(), n.clone());
        if let Some(existing) = self.symbols.get(&key) {
            return Arc::clone(existing);
        }

        let ns_hash = ns.as_deref().map_or(0, natural_str_hash);
        let inner = Arc::new(SymbolInner {
            hasheq: hash_combine(string_hash(&n, STRING_SEED), ns_hash),
            natural_hash: hash_combine(natural_str_hash(&n), ns_hash),
            namespace: ns,
            name: n,
        });
        self.symbols.insert(key, Arc::clone(&inner));
        inner
    }
}

fn get_interner() -> &'static Mutex<SymbolInterner> {
    SYMBOL_INTERNER.get_or_init(|| Mutex::new(SymbolInterner::new()))
}

impl Symbol {
    /// Create a new symbol with no namespace.
    pub fn new(name: &str) -> Self {
        let inner = get_interner()
            .lock()
            .expect(
                "Symbol interner mutex poisoned: another thread panicked while holding the lock",
            )
            .intern(None, name);
        Symbol { inner }
    }

    /// Create a new symbol with a namespace.
    pub fn with_namespace(namespace: &str, name: &str) -> Self {
        let inner = get_interner()
            .lock()
            .expect(
                "Symbol interner mutex poisoned: another thread panicked while holding the lock",
            )
            .intern(Some(namespace), name);
        Symbol { inner }
    }

    /// Parse a symbol from a string like "foo" or "ns/foo".
    pub fn parse(s: &str) -> Self {
        if s == "/" {
            return Symbol::new("/");
        }
        match s.split_once('/') {
            Some((ns, name)) => Symbol::with_namespace(ns, name),
            None => Symbol::new(s),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.inner.namespace.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Natural hash: name and namespace host string hashes, combined.
    #[must_use]
    pub fn natural_hash(&self) -> i32 {
        self.inner.natural_hash
    }

    /// Pointer identity; equivalent to `==` because symbols are interned.
    #[must_use]
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ns) = &self.inner.namespace {
            write!(f, "{}/{}", ns, self.inner.name)
        } else {
            write!(f, "{}", self.inner.name)
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Host string order: lexicographic over UTF-16 code units.
fn utf16_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.inner.namespace, &other.inner.namespace) {
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => utf16_cmp(&self.inner.name, &other.inner.name),
            (Some(a), Some(b)) => match utf16_cmp(a, b) {
                Ordering::Equal => utf16_cmp(&self.inner.name, &other.inner.name),
                other => other,
            },
        }
    }
}

impl HashEq for Symbol {
    fn hasheq(&self) -> i32 {
        self.inner.hasheq
    }
}

impl Comparable for Symbol {
    fn compare_to(&self, other: &Value) -> Result<Ordering> {
        match other {
            Value::Symbol(sym) => Ok(self.cmp(sym)),
            _ => Err(Error::not_orderable("symbol", other.type_name())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_symbol() {
        let sym = Symbol::new("foo");
        assert_eq!(sym.name(), "foo");
        assert!(sym.namespace().is_none());
        assert_eq!(format!("{}", sym), "foo");
    }

    #[test]
    fn test_namespaced_symbol() {
        let sym = Symbol::with_namespace("user", "foo");
        assert_eq!(sym.name(), "foo");
        assert_eq!(sym.namespace(), Some("user"));
        assert_eq!(format!("{}", sym), "user/foo");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Symbol::parse("foo"), Symbol::new("foo"));
        assert_eq!(Symbol::parse("user/foo"), Symbol::with_namespace("user", "foo"));
        assert_eq!(Symbol::parse("/").name(), "/");
    }

    #[test]
    fn test_interning() {
        let sym1 = Symbol::new("foo");
        let sym2 = Symbol::new("foo");
        assert!(sym1.ptr_eq(&sym2));
        assert_ne!(sym1, Symbol::new("bar"));
    }

    #[test]
    fn test_hasheq_depends_on_namespace() {
        let plain = Symbol::new("foo");
        let qualified = Symbol::with_namespace("user", "foo");
        assert_eq!(plain.hasheq(), hash_combine(string_hash("foo", STRING_SEED), 0));
        assert_ne!(plain.hasheq(), qualified.hasheq());
        assert_eq!(qualified.hasheq(), Symbol::parse("user/foo").hasheq());
    }

    #[test]
    fn test_ordering() {
        let a = Symbol::new("a");
        let b = Symbol::new("b");
        let ns_a = Symbol::with_namespace("ns", "a");

        assert!(a < b);
        assert!(a < ns_a);
    }

    #[test]
    fn test_ordering_matches_string_order() {
        // U+FFFD is past the surrogate range in UTF-16 but before U+1F600 by code point
        let replacement = Symbol::new("\u{FFFD}");
        let emoji = Symbol::new("\u{1F600}");
        assert_eq!(replacement.cmp(&emoji), Ordering::Greater);
        assert_eq!(
            crate::compare::compare(&Value::string("\u{FFFD}"), &Value::string("\u{1F600}")),
            Ok(Ordering::Greater)
        );

        let ns_replacement = Symbol::with_namespace("\u{FFFD}", "x");
        let ns_emoji = Symbol::with_namespace("\u{1F600}", "x");
        assert!(ns_replacement > ns_emoji);
    }

    #[test]
    fn test_compare_to_non_symbol_is_error() {
        let err = Symbol::new("a").compare_to(&Value::Int(1)).unwrap_err();
        assert_eq!(err, Error::not_orderable("symbol", "int"));
    }
}
