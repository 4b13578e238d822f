//! Key hashing shared by every cache tier.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Hash a key with `FxHasher`, folded to 32 bits.
///
/// Owned keys and their borrowed forms (`Arc<[u8]>` / `[u8]`) hash
/// identically, so lookups by borrowed key land on the same slot.
#[inline]
pub fn fx_hash<Q: Hash + ?Sized>(key: &Q) -> u32 {
    let mut hasher = FxHasher::default();
    key.hash(&mut hasher);
    let h = hasher.finish();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "intentional fold of the 64-bit hash into 32 bits"
    )]
    let folded = (h ^ (h >> 32)) as u32;
    folded
}
