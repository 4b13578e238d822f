//! Caching, interning and pooling for the PDF lexer.
//!
//! Everything in this crate is best-effort: a cache miss is always safe and
//! only costs recomputation, and a pool miss only costs an allocation.
//!
//! - [`FixedCache`]: single-tier, power-of-two, overwrite-on-collision cache.
//! - [`TwoTierCache`]: an unsynchronized local [`FixedCache`] backed by a
//!   [`SharedTier`] that many consumers (threads) access without blocking.
//! - [`ByteInterner`]: deduplicates byte runs into shared `Arc<[u8]>`s.
//! - [`ObjectPool`]: bounded lock-free pools of reusable buffers, handed out
//!   as scoped [`Pooled`] guards.
//!
//! # Tracing
//!
//! - `RUST_LOG=pdf_cache=debug`: cache construction and oversize pool discards.
//! - `RUST_LOG=pdf_cache=trace`: every shared-tier eviction.

mod builders;
mod error;
mod fixed_cache;
mod hash;
mod interner;
mod pool;
mod two_tier;

pub use builders::{ArrayBuilder, AuxStack, StringBuffer};
pub use error::CacheError;
pub use fixed_cache::{CacheEntry, FixedCache};
pub use hash::fx_hash;
pub use interner::ByteInterner;
pub use pool::{global_byte_pool, global_string_pool, ObjectPool, PoolConfig, Pooled, Recycle};
pub use two_tier::{CacheStats, SharedTier, TwoTierCache, TwoTierConfig};
