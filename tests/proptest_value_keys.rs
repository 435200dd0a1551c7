// hasheq - Property-based tests for value-keyed caches
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! A `WeakCache` keyed by `Value` must find an entry through any
//! equivalent key, whatever its representation.

use hasheq::{Value, WeakCache, WeakCacheConfig};
use num_bigint::BigInt;
use proptest::prelude::*;
use std::sync::Arc;

fn value_cache() -> WeakCache<Value, i64> {
    WeakCache::with_config(WeakCacheConfig::new().with_sweep_on_insert(false))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Int keys are found through their BigInt twins and vice versa
    #[test]
    fn int_and_bigint_keys_find_the_same_entry(
        keys in prop::collection::hash_set(any::<i64>(), 1..20)
    ) {
        let cache = value_cache();
        let held: Vec<_> = keys
            .iter()
            .map(|&k| (k, cache.insert(Value::int(k), k)))
            .collect();

        for (k, entry) in &held {
            let found = cache.get(&Value::bigint(BigInt::from(*k)));
            prop_assert!(found.is_some_and(|f| Arc::ptr_eq(&f, entry)));
        }
    }

    /// Interning through a twin key reuses the live entry
    #[test]
    fn intern_through_twin_key_reuses_entry(ns in prop::collection::vec(any::<i64>(), 0..6)) {
        let cache = value_cache();
        let vector = Value::vector(ns.iter().map(|&n| Value::int(n)).collect());
        let list = Value::list(ns.iter().map(|&n| Value::bigint(BigInt::from(n))).collect());

        let first = cache.intern(vector, || 1);
        let second = cache.intern(list, || 2);
        prop_assert!(Arc::ptr_eq(&first, &second));
        prop_assert_eq!(cache.len(), 1);
    }
}
