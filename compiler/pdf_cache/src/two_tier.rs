//! Two-tier cache: an unsynchronized local tier backed by a shared tier.
//!
//! The local tier is a plain [`FixedCache`] owned by one consumer. The shared
//! tier is a larger array of slots that many consumers (usually one per
//! thread) read and write concurrently. Shared slots are only ever touched
//! with `try_read` / `try_write`: a contended slot is treated as a miss (on
//! read) or skipped (on write), so no operation blocks.
//!
//! Lookups check the local tier, then the shared tier, and never promote a
//! shared hit into the local tier. Writers add to both tiers.
//!
//! Shared placement: the start slot mixes in the bits above the local index,
//! `(h ^ (h >> log2(local_size))) & shared_mask`, so entries that collide
//! locally spread out in the shared tier. An insert probes `bucket_size`
//! slots at triangular offsets from the start and claims the first empty or
//! same-hash slot. When the whole bucket is taken, a pseudo-randomly chosen
//! slot of the bucket is evicted.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::{validate_size, CacheError};
use crate::fixed_cache::FixedCache;
use crate::hash::fx_hash;

/// Process-wide counter feeding victim selection.
static NEXT_RANDOM: AtomicU32 = AtomicU32::new(0);

#[inline]
fn next_random() -> u32 {
    NEXT_RANDOM.fetch_add(1, Ordering::Relaxed)
}

/// Triangular number `i(i+1)/2`: the probe offset of the `i`-th slot.
#[inline]
fn tri(i: u32) -> u32 {
    i.wrapping_mul(i.wrapping_add(1)) / 2
}

/// Sizes for a [`TwoTierCache`]. All three must be powers of two.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TwoTierConfig {
    pub local_size: usize,
    pub shared_size: usize,
    /// Number of shared slots probed before evicting.
    pub bucket_size: usize,
}

impl TwoTierConfig {
    pub const fn new(local_size: usize, shared_size: usize, bucket_size: usize) -> Self {
        TwoTierConfig {
            local_size,
            shared_size,
            bucket_size,
        }
    }

    /// Check every size.
    pub fn validate(&self) -> Result<(), CacheError> {
        self.validated().map(|_| ())
    }

    fn validated(&self) -> Result<(u32, u32, u32), CacheError> {
        let local = validate_size("local tier", self.local_size)?;
        let shared = validate_size("shared tier", self.shared_size)?;
        let bucket = validate_size("bucket", self.bucket_size)?;
        if bucket > shared {
            return Err(CacheError::BucketTooLarge {
                bucket: self.bucket_size,
                shared: self.shared_size,
            });
        }
        Ok((local, shared, bucket))
    }
}

/// Counters for one [`TwoTierCache`] consumer.
///
/// `evictions` is tier-wide: it counts evictions by every consumer attached
/// to the same shared tier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub local_hits: u64,
    pub shared_hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hits(&self) -> u64 {
        self.local_hits + self.shared_hits
    }
}

struct SharedSlot<K, V> {
    /// Stored hash of the entry, 0 while the slot is empty.
    tag: AtomicU32,
    entry: RwLock<Option<(K, V)>>,
}

/// The shared region of a [`TwoTierCache`].
///
/// `Send + Sync` whenever `K` and `V` are; hand it around in an `Arc`.
pub struct SharedTier<K, V> {
    slots: Box<[SharedSlot<K, V>]>,
    size: u32,
    mask: u32,
    bucket_size: u32,
    bucket_mask: u32,
    local_size: u32,
    local_bits: u32,
    evictions: AtomicU64,
}

impl<K, V> fmt::Debug for SharedTier<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedTier")
            .field("size", &self.size)
            .field("bucket_size", &self.bucket_size)
            .field("local_size", &self.local_size)
            .field("evictions", &self.evictions())
            .finish_non_exhaustive()
    }
}

impl<K, V> SharedTier<K, V> {
    pub fn new(config: TwoTierConfig) -> Result<Self, CacheError> {
        let (local_size, size, bucket_size) = config.validated()?;
        debug!(
            local = local_size,
            shared = size,
            bucket = bucket_size,
            "creating shared cache tier"
        );
        Ok(SharedTier {
            slots: (0..size)
                .map(|_| SharedSlot {
                    tag: AtomicU32::new(0),
                    entry: RwLock::new(None),
                })
                .collect(),
            size,
            mask: size - 1,
            bucket_size,
            bucket_mask: bucket_size - 1,
            local_size,
            // A one-slot local tier would fold every hash to zero.
            local_bits: local_size.trailing_zeros().max(1),
            evictions: AtomicU64::new(0),
        })
    }

    /// The configuration this tier was built with.
    pub fn config(&self) -> TwoTierConfig {
        TwoTierConfig::new(
            self.local_size as usize,
            self.size as usize,
            self.bucket_size as usize,
        )
    }

    /// Evictions performed so far by every attached consumer.
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    #[inline]
    fn start(&self, raw: u32) -> u32 {
        (raw ^ (raw >> self.local_bits)) & self.mask
    }

    #[inline]
    fn tag(&self, raw: u32) -> u32 {
        raw | self.size
    }

    #[inline]
    fn probe(&self, start: u32, i: u32) -> usize {
        (start.wrapping_add(tri(i)) & self.mask) as usize
    }

    /// Probe for `key`. Contended slots are skipped.
    fn find<Q>(&self, key: &Q, raw: u32) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        V: Clone,
    {
        let tag = self.tag(raw);
        let start = self.start(raw);
        for i in 0..self.bucket_size {
            let slot = &self.slots[self.probe(start, i)];
            let found = slot.tag.load(Ordering::Acquire);
            if found == 0 {
                return None;
            }
            if found != tag {
                continue;
            }
            if let Some(guard) = slot.entry.try_read() {
                if let Some((k, v)) = guard.as_ref() {
                    if k.borrow() == key {
                        return Some(v.clone());
                    }
                }
            }
        }
        None
    }

    /// Claim the first empty or same-hash slot of the bucket, else evict.
    fn insert(&self, raw: u32, key: K, value: V) {
        let tag = self.tag(raw);
        let start = self.start(raw);
        for i in 0..self.bucket_size {
            let slot = &self.slots[self.probe(start, i)];
            let found = slot.tag.load(Ordering::Acquire);
            if found == 0 || found == tag {
                // Lost the race for this slot: skip the write.
                if let Some(mut guard) = slot.entry.try_write() {
                    *guard = Some((key, value));
                    slot.tag.store(tag, Ordering::Release);
                }
                return;
            }
        }

        let victim = self.probe(start, next_random() & self.bucket_mask);
        let slot = &self.slots[victim];
        if let Some(mut guard) = slot.entry.try_write() {
            *guard = Some((key, value));
            slot.tag.store(tag, Ordering::Release);
            self.evictions.fetch_add(1, Ordering::Relaxed);
            trace!(slot = victim, "shared tier eviction");
        }
    }
}

/// One consumer's view of a two-tier cache.
///
/// Cheap to [`fork`](TwoTierCache::fork): a fork gets a fresh local tier
/// and shares the shared tier.
#[derive(Debug)]
pub struct TwoTierCache<K, V> {
    local: FixedCache<K, V>,
    shared: Arc<SharedTier<K, V>>,
    local_hits: u64,
    shared_hits: u64,
    misses: u64,
}

impl<K: Hash + Eq, V> TwoTierCache<K, V> {
    /// Create a cache with a fresh shared tier.
    pub fn new(config: TwoTierConfig) -> Result<Self, CacheError> {
        Ok(Self::attach(Arc::new(SharedTier::new(config)?)))
    }

    /// Create a consumer over an existing shared tier.
    pub fn attach(shared: Arc<SharedTier<K, V>>) -> Self {
        TwoTierCache {
            local: FixedCache::with_validated_size(shared.local_size),
            shared,
            local_hits: 0,
            shared_hits: 0,
            misses: 0,
        }
    }

    /// A new consumer sharing this cache's shared tier.
    pub fn fork(&self) -> Self {
        Self::attach(Arc::clone(&self.shared))
    }

    pub fn shared(&self) -> &Arc<SharedTier<K, V>> {
        &self.shared
    }

    pub fn shares_tier_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            local_hits: self.local_hits,
            shared_hits: self.shared_hits,
            misses: self.misses,
            evictions: self.shared.evictions(),
        }
    }

    /// Look up `key` in the local tier, then the shared tier.
    pub fn try_get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let raw = fx_hash(key);
        self.lookup(key, raw)
    }

    fn lookup<Q>(&mut self, key: &Q, raw: u32) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        V: Clone,
    {
        if let Some(value) = self.local.find(key, raw) {
            self.local_hits += 1;
            return Some(value.clone());
        }
        if let Some(value) = self.shared.find(key, raw) {
            self.shared_hits += 1;
            return Some(value);
        }
        self.misses += 1;
        None
    }

    /// Add to both tiers.
    pub fn add(&mut self, key: K, value: V)
    where
        K: Clone,
        V: Clone,
    {
        let raw = fx_hash(&key);
        self.store(raw, key, value);
    }

    fn store(&mut self, raw: u32, key: K, value: V)
    where
        K: Clone,
        V: Clone,
    {
        self.shared.insert(raw, key.clone(), value.clone());
        self.local.insert(raw, key, value);
    }

    /// Return the cached value for `key`, or build an owned key and value
    /// with `make`, cache them in both tiers, and return the value.
    pub fn get_or_add<Q>(&mut self, key: &Q, make: impl FnOnce(&Q) -> (K, V)) -> V
    where
        K: Borrow<Q> + Clone,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let raw = fx_hash(key);
        if let Some(value) = self.lookup(key, raw) {
            return value;
        }
        let (owned, value) = make(key);
        debug_assert!(owned.borrow() == key, "get_or_add built a different key");
        self.store(raw, owned, value.clone());
        value
    }
}

#[cfg(test)]
mod tests;
