//! Single-tier fixed-capacity cache.
//!
//! A power-of-two array of slots. A key's slot is `hash & mask`; a colliding
//! insert overwrites the slot unconditionally (no chaining, no probing).
//! Lookups can therefore miss a value that was added earlier if a different
//! key landed on the same slot in between. Callers always keep a way to
//! recompute the value, so a miss is never an error.
//!
//! Stored hashes have the cache size OR-ed in, so a stored hash is never
//! zero. Zero stays reserved as the "empty" tag used by the shared tier.

use std::borrow::Borrow;
use std::hash::Hash;

use crate::error::{validate_size, CacheError};
use crate::hash::fx_hash;

/// A key/value pair stored at a computed slot.
#[derive(Clone, Debug)]
pub struct CacheEntry<K, V> {
    hash: u32,
    key: K,
    value: V,
}

impl<K, V> CacheEntry<K, V> {
    /// The stored (never zero) hash.
    pub fn hash(&self) -> u32 {
        self.hash
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Fixed-size, overwrite-on-collision cache.
///
/// Not synchronized: a `FixedCache` belongs to one consumer. See
/// [`TwoTierCache`](crate::TwoTierCache) for sharing across threads.
#[derive(Clone, Debug)]
pub struct FixedCache<K, V> {
    entries: Box<[Option<CacheEntry<K, V>>]>,
    size: u32,
    mask: u32,
}

impl<K: Hash + Eq, V> FixedCache<K, V> {
    /// Create a cache with `size` slots.
    ///
    /// `size` must be a non-zero power of two no larger than `2^30`.
    pub fn new(size: usize) -> Result<Self, CacheError> {
        let size = validate_size("cache", size)?;
        Ok(Self::with_validated_size(size))
    }

    /// Create a cache whose size was already validated.
    pub(crate) fn with_validated_size(size: u32) -> Self {
        debug_assert!(size.is_power_of_two(), "cache size must be a power of two");
        FixedCache {
            entries: (0..size).map(|_| None).collect(),
            size,
            mask: size - 1,
        }
    }

    /// Number of slots.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Number of occupied slots (O(size)).
    pub fn occupied(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// The hash stored for `raw` (an [`fx_hash`] result): never zero.
    #[inline]
    fn stored_hash(&self, raw: u32) -> u32 {
        raw | self.size
    }

    #[inline]
    fn slot(&self, stored: u32) -> usize {
        (stored & self.mask) as usize
    }

    /// Look up a key.
    ///
    /// Returns `None` if the key was never added or was evicted by a
    /// colliding insert.
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key, fx_hash(key))
    }

    /// Look up a key whose raw hash was already computed.
    pub(crate) fn find<Q>(&self, key: &Q, raw: u32) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let stored = self.stored_hash(raw);
        match &self.entries[self.slot(stored)] {
            Some(entry) if entry.hash == stored && entry.key.borrow() == key => Some(&entry.value),
            _ => None,
        }
    }

    /// Add a key/value pair, overwriting whatever occupied its slot.
    pub fn add(&mut self, key: K, value: V) {
        let raw = fx_hash(&key);
        self.insert(raw, key, value);
    }

    /// Add a key/value pair whose raw hash was already computed.
    pub(crate) fn insert(&mut self, raw: u32, key: K, value: V) {
        let hash = self.stored_hash(raw);
        let slot = self.slot(hash);
        self.entries[slot] = Some(CacheEntry { hash, key, value });
    }

    /// Return the cached value for `key`, computing and caching it on a miss.
    pub fn get_or_add(&mut self, key: K, make: impl FnOnce(&K) -> V) -> &V {
        let hash = self.stored_hash(fx_hash(&key));
        let slot = self.slot(hash);
        let entry = &mut self.entries[slot];
        let hit = entry
            .as_ref()
            .is_some_and(|e| e.hash == hash && e.key == key);
        if !hit {
            let value = make(&key);
            *entry = Some(CacheEntry { hash, key, value });
        }
        match entry {
            Some(e) => &e.value,
            None => unreachable!("cache slot {slot} was filled above"),
        }
    }

    /// Iterate the occupied entries in slot order.
    pub fn entries(&self) -> impl Iterator<Item = &CacheEntry<K, V>> {
        self.entries.iter().flatten()
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = None;
        }
    }
}

#[cfg(test)]
mod tests;
