//! Absolute source spans.

use std::fmt;

/// Half-open byte range `[start, end)` in the source buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextSpan {
    pub start: u32,
    pub end: u32,
}

impl TextSpan {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        TextSpan { start, end }
    }

    /// Span of `width` bytes starting at `start`.
    #[inline]
    pub const fn at(start: u32, width: u32) -> Self {
        TextSpan {
            start,
            end: start + width,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    #[inline]
    pub fn contains_span(&self, other: TextSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The span as a `usize` range, for slicing the source.
    #[inline]
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
