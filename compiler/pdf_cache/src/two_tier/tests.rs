use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn cache(local: usize, shared: usize, bucket: usize) -> TwoTierCache<u32, u64> {
    TwoTierCache::new(TwoTierConfig::new(local, shared, bucket)).unwrap_or_else(|e| panic!("{e}"))
}

// === Configuration ===

#[test]
fn config_rejects_bad_sizes() {
    assert!(matches!(
        TwoTierConfig::new(3, 16, 4).validate(),
        Err(CacheError::NotPowerOfTwo { what: "local tier", .. })
    ));
    assert!(matches!(
        TwoTierConfig::new(4, 0, 4).validate(),
        Err(CacheError::NotPowerOfTwo { what: "shared tier", .. })
    ));
    assert_eq!(
        TwoTierConfig::new(4, 8, 16).validate(),
        Err(CacheError::BucketTooLarge {
            bucket: 16,
            shared: 8
        })
    );
    assert_eq!(TwoTierConfig::new(64, 512, 8).validate(), Ok(()));
}

#[test]
fn shared_tier_reports_its_config() {
    let config = TwoTierConfig::new(8, 32, 4);
    let tier: SharedTier<u32, u32> = SharedTier::new(config).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(tier.config(), config);
    assert_eq!(tier.evictions(), 0);
}

#[test]
fn triangular_offsets() {
    let offsets: Vec<u32> = (0..6).map(tri).collect();
    assert_eq!(offsets, vec![0, 1, 3, 6, 10, 15]);
}

// === Lookup ===

#[test]
fn add_then_local_hit() {
    let mut c = cache(16, 64, 4);
    c.add(1, 100);
    assert_eq!(c.try_get(&1), Some(100));
    assert_eq!(c.try_get(&2), None);
    let stats = c.stats();
    assert_eq!(stats.local_hits, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn fork_sees_shared_entries_without_promotion() {
    let mut a = cache(16, 64, 4);
    a.add(7, 49);

    let mut b = a.fork();
    assert!(a.shares_tier_with(&b));
    assert_eq!(b.try_get(&7), Some(49));
    assert_eq!(b.try_get(&7), Some(49));

    // Both reads went to the shared tier: nothing was promoted.
    let stats = b.stats();
    assert_eq!(stats.shared_hits, 2);
    assert_eq!(stats.local_hits, 0);
    assert_eq!(stats.hits(), 2);
}

#[test]
fn separate_caches_do_not_share() {
    let mut a = cache(16, 64, 4);
    let mut b = cache(16, 64, 4);
    a.add(3, 9);
    assert!(!a.shares_tier_with(&b));
    assert_eq!(b.try_get(&3), None);
}

#[test]
fn get_or_add_builds_once() {
    let mut c = cache(8, 32, 4);
    let mut calls = 0;
    for _ in 0..3 {
        let v = c.get_or_add(&5, |k| {
            calls += 1;
            (*k, u64::from(*k) * 10)
        });
        assert_eq!(v, 50);
    }
    assert_eq!(calls, 1);
}

#[test]
fn borrowed_byte_keys() {
    let mut c: TwoTierCache<Arc<[u8]>, usize> =
        TwoTierCache::new(TwoTierConfig::new(8, 32, 4)).unwrap_or_else(|e| panic!("{e}"));
    let v = c.get_or_add(&b"xref"[..], |k| (Arc::from(k), k.len()));
    assert_eq!(v, 4);
    assert_eq!(c.try_get(&b"xref"[..]), Some(4));
}

// === Eviction ===

#[test]
fn full_bucket_evicts() {
    let mut c = cache(2, 2, 1);
    for k in 0..64 {
        c.add(k, u64::from(k));
    }
    assert!(c.stats().evictions > 0);
    // Whatever survived still maps to its own value.
    let mut fresh = c.fork();
    for k in 0..64 {
        if let Some(v) = fresh.try_get(&k) {
            assert_eq!(v, u64::from(k));
        }
    }
}

#[test]
fn evictions_are_tier_wide() {
    let a = cache(2, 2, 1);
    let mut b = a.fork();
    for k in 0..64 {
        b.add(k, 0);
    }
    assert_eq!(a.stats().evictions, b.stats().evictions);
}

// === Concurrency ===

#[test]
fn concurrent_forks_agree_on_values() {
    let root = cache(16, 128, 8);
    std::thread::scope(|scope| {
        for t in 0..4_u32 {
            let mut local = root.fork();
            scope.spawn(move || {
                for i in 0..500_u32 {
                    let key = (i * 7 + t) % 97;
                    let v = local.get_or_add(&key, |k| (*k, u64::from(*k) * 3));
                    assert_eq!(v, u64::from(key) * 3);
                }
            });
        }
    });
}

proptest! {
    #[test]
    fn cached_values_always_match_their_key(keys in proptest::collection::vec(any::<u32>(), 0..200)) {
        let mut c = cache(4, 16, 4);
        for k in &keys {
            let v = c.get_or_add(k, |k| (*k, u64::from(*k) + 1));
            prop_assert_eq!(v, u64::from(*k) + 1);
        }
        for k in &keys {
            if let Some(v) = c.try_get(k) {
                prop_assert_eq!(v, u64::from(*k) + 1);
            }
        }
    }
}
