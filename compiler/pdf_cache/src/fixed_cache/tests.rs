use super::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;

/// Find a key different from `key` that maps to the same slot.
fn colliding_key(key: u32, size: u32) -> u32 {
    let mask = size - 1;
    let target = fx_hash(&key) & mask;
    (key + 1..)
        .find(|k| fx_hash(k) & mask == target)
        .unwrap_or_else(|| panic!("no colliding key for {key}"))
}

#[test]
fn rejects_sizes_that_are_not_powers_of_two() {
    for size in [0, 3, 6, 100] {
        assert!(matches!(
            FixedCache::<u32, u32>::new(size),
            Err(CacheError::NotPowerOfTwo { .. })
        ));
    }
}

#[test]
fn rejects_oversized_caches() {
    assert!(matches!(
        FixedCache::<u32, u32>::new(1 << 31),
        Err(CacheError::TooLarge { .. })
    ));
}

#[test]
fn add_then_get() {
    let mut cache = FixedCache::new(16).unwrap_or_else(|e| panic!("{e}"));
    cache.add(7_u32, "seven");
    assert_eq!(cache.try_get(&7), Some(&"seven"));
    assert_eq!(cache.try_get(&8), None);
}

#[test]
fn repeated_lookup_is_idempotent() {
    let mut cache = FixedCache::new(8).unwrap_or_else(|e| panic!("{e}"));
    cache.add(42_u32, 1_u8);
    let first = cache.try_get(&42).copied();
    let second = cache.try_get(&42).copied();
    assert_eq!(first, Some(1));
    assert_eq!(first, second);
}

#[test]
fn colliding_insert_overwrites() {
    let mut cache = FixedCache::new(4).unwrap_or_else(|e| panic!("{e}"));
    let other = colliding_key(1, 4);
    cache.add(1_u32, "one");
    cache.add(other, "other");
    // The earlier entry is gone: a legitimate miss, not a bug.
    assert_eq!(cache.try_get(&1), None);
    assert_eq!(cache.try_get(&other), Some(&"other"));
    assert_eq!(cache.occupied(), 1);
}

#[test]
fn stored_hash_is_never_zero() {
    let mut cache = FixedCache::new(2).unwrap_or_else(|e| panic!("{e}"));
    for key in 0_u32..64 {
        cache.add(key, ());
    }
    assert!(cache.entries().all(|e| e.hash() != 0));
}

#[test]
fn borrowed_lookup_matches_owned_key() {
    let mut cache: FixedCache<Arc<[u8]>, u8> = FixedCache::new(32).unwrap_or_else(|e| panic!("{e}"));
    cache.add(Arc::from(&b"endobj"[..]), 3);
    assert_eq!(cache.try_get(&b"endobj"[..]), Some(&3));
    assert_eq!(cache.try_get(&b"obj"[..]), None);
}

#[test]
fn get_or_add_computes_once() {
    let mut cache = FixedCache::new(8).unwrap_or_else(|e| panic!("{e}"));
    let mut calls = 0;
    let a = *cache.get_or_add(5_u32, |k| {
        calls += 1;
        k * 2
    });
    let b = *cache.get_or_add(5_u32, |k| {
        calls += 1;
        k * 3
    });
    assert_eq!((a, b), (10, 10));
    assert_eq!(calls, 1);
}

#[test]
fn clear_empties_every_slot() {
    let mut cache = FixedCache::new(8).unwrap_or_else(|e| panic!("{e}"));
    cache.add(1_u32, 1_u32);
    cache.add(2_u32, 2_u32);
    cache.clear();
    assert_eq!(cache.occupied(), 0);
    assert_eq!(cache.try_get(&1), None);
}
