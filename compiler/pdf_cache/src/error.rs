use thiserror::Error;

/// Largest size any cache tier may be configured with.
///
/// Slot indices and the size bit OR-ed into stored hashes must fit in `u32`.
pub(crate) const MAX_CACHE_SIZE: usize = 1 << 30;

/// Invalid cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// A tier size (or bucket size) must be a non-zero power of two.
    #[error("{what} size {size} is not a power of two")]
    NotPowerOfTwo { what: &'static str, size: usize },
    /// A tier size exceeds `2^30` slots.
    #[error("{what} size {size} exceeds the maximum of {max}")]
    TooLarge {
        what: &'static str,
        size: usize,
        max: usize,
    },
    /// The probe bucket is larger than the shared tier it probes.
    #[error("bucket size {bucket} exceeds shared tier size {shared}")]
    BucketTooLarge { bucket: usize, shared: usize },
}

/// Validate a tier size, returning it as `u32`.
pub(crate) fn validate_size(what: &'static str, size: usize) -> Result<u32, CacheError> {
    if !size.is_power_of_two() {
        return Err(CacheError::NotPowerOfTwo { what, size });
    }
    if size > MAX_CACHE_SIZE {
        return Err(CacheError::TooLarge {
            what,
            size,
            max: MAX_CACHE_SIZE,
        });
    }
    u32::try_from(size).map_err(|_| CacheError::TooLarge {
        what,
        size,
        max: MAX_CACHE_SIZE,
    })
}
