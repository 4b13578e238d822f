//! Immutable, shareable source bytes.

use std::sync::Arc;

use thiserror::Error;

/// Source construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Widths and positions are `u32`, so larger inputs cannot be lexed.
    #[error("source is {len} bytes long; at most {max} bytes can be lexed", max = u32::MAX)]
    TooLarge { len: usize },
}

/// The complete input, owned behind an `Arc` so it can be shared with
/// worker threads without copying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Arc<[u8]>,
}

impl SourceBuffer {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Result<Self, SourceError> {
        let bytes = bytes.into();
        if u32::try_from(bytes.len()).is_err() {
            return Err(SourceError::TooLarge { len: bytes.len() });
        }
        Ok(SourceBuffer { bytes })
    }

    /// Copy `bytes` into a new buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SourceError> {
        Self::new(bytes)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy bytes starting at `src_index` into `dest`.
    ///
    /// Returns the number of bytes copied: the smaller of `dest.len()` and
    /// the bytes remaining, and 0 when `src_index` is at or past the end.
    pub fn copy_to(&self, src_index: usize, dest: &mut [u8]) -> usize {
        let Some(remaining) = self.bytes.get(src_index..) else {
            return 0;
        };
        let n = remaining.len().min(dest.len());
        dest[..n].copy_from_slice(&remaining[..n]);
        n
    }
}
