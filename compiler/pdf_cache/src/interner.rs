//! Byte-run interning over a two-tier cache.
//!
//! Equal byte runs come back as the same `Arc<[u8]>` allocation for as long
//! as the run stays cached. Eviction only means a later call allocates a new
//! `Arc` with equal contents, so interned values are compared by content,
//! never by pointer.

use std::sync::Arc;

use crate::error::CacheError;
use crate::two_tier::{CacheStats, SharedTier, TwoTierCache, TwoTierConfig};

/// Deduplicates byte runs into shared `Arc<[u8]>`s.
#[derive(Debug)]
pub struct ByteInterner {
    cache: TwoTierCache<Arc<[u8]>, Arc<[u8]>>,
}

impl ByteInterner {
    pub fn new(config: TwoTierConfig) -> Result<Self, CacheError> {
        Ok(ByteInterner {
            cache: TwoTierCache::new(config)?,
        })
    }

    /// An interner over an existing shared tier.
    pub fn attach(shared: Arc<SharedTier<Arc<[u8]>, Arc<[u8]>>>) -> Self {
        ByteInterner {
            cache: TwoTierCache::attach(shared),
        }
    }

    /// A new interner sharing this one's shared tier.
    pub fn fork(&self) -> Self {
        ByteInterner {
            cache: self.cache.fork(),
        }
    }

    pub fn shared(&self) -> &Arc<SharedTier<Arc<[u8]>, Arc<[u8]>>> {
        self.cache.shared()
    }

    /// Intern `bytes`.
    pub fn intern(&mut self, bytes: &[u8]) -> Arc<[u8]> {
        self.cache.get_or_add(bytes, |b| {
            let run: Arc<[u8]> = Arc::from(b);
            (Arc::clone(&run), run)
        })
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests;
