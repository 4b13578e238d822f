//! Sliding window over a [`SourceBuffer`].
//!
//! Bytes are copied from the source into a pooled window buffer on demand.
//! The window keeps the current lexeme contiguous: when it fills up, bytes
//! before the lexeme start (or before the cursor outside lexeme mode) are
//! shifted out, and if the lexeme alone fills the window the window doubles.
//!
//! ```text
//!   basis                      absolute position of window[0]
//!     |     lexeme_basis       start of the current lexeme (lexeme mode)
//!     |         |    offset    cursor
//!     v         v      v
//!    [. . . . . l e x e . . . . . . . . .]
//!                             ^ count: materialized bytes
//! ```
//!
//! Invariant: `lexeme_basis <= offset`. Absolute position is
//! `basis + offset`. Reading past the end of the source is never an error:
//! [`peek`](SlidingWindow::peek) returns `None`.

use std::sync::Arc;

use pdf_cache::{global_byte_pool, ByteInterner, Pooled};
use tracing::trace;

use crate::SourceBuffer;

/// Smallest window the lexer will use.
pub const MIN_WINDOW_CAPACITY: usize = 16;

pub struct SlidingWindow<'a> {
    source: &'a SourceBuffer,
    window: Pooled<'static, Vec<u8>>,
    basis: usize,
    offset: usize,
    count: usize,
    lexeme_basis: Option<usize>,
}

impl<'a> SlidingWindow<'a> {
    pub fn new(source: &'a SourceBuffer, capacity: usize) -> Self {
        let mut window = global_byte_pool().rent();
        window.resize(capacity.max(MIN_WINDOW_CAPACITY), 0);
        SlidingWindow {
            source,
            window,
            basis: 0,
            offset: 0,
            count: 0,
            lexeme_basis: None,
        }
    }

    /// Current window size in bytes (grows while a lexeme outgrows it).
    pub fn capacity(&self) -> usize {
        self.window.len()
    }

    /// Materialize more bytes. Returns `false` at the end of the source.
    fn more_bytes(&mut self) -> bool {
        if self.basis + self.count >= self.source.len() {
            return false;
        }

        let keep_from = self.lexeme_basis.unwrap_or(self.offset).min(self.count);
        if keep_from > 0 {
            self.window.copy_within(keep_from..self.count, 0);
            self.basis += keep_from;
            self.count -= keep_from;
            self.offset -= keep_from;
            if let Some(lexeme_basis) = &mut self.lexeme_basis {
                *lexeme_basis -= keep_from;
            }
        }

        if self.count == self.window.len() {
            let grown = self.window.len() * 2;
            trace!(
                from = self.window.len(),
                to = grown,
                position = self.basis,
                "growing lexer window"
            );
            self.window.resize(grown, 0);
        }

        let copied = self
            .source
            .copy_to(self.basis + self.count, &mut self.window[self.count..]);
        self.count += copied;
        copied > 0
    }

    /// Byte `delta` positions ahead of the cursor, or `None` past the end.
    #[inline]
    pub fn peek(&mut self, delta: usize) -> Option<u8> {
        loop {
            let index = self.offset + delta;
            if index < self.count {
                return Some(self.window[index]);
            }
            if !self.more_bytes() {
                return None;
            }
        }
    }

    /// Move the cursor. Moving past the end just exhausts the window.
    #[inline]
    pub fn advance(&mut self, delta: usize) {
        self.offset += delta;
    }

    /// Advance while `pred` holds; returns the number of bytes advanced.
    #[inline]
    pub fn advance_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        // Absolute: the window may shift while advancing.
        let start = self.position();
        while let Some(b) = self.peek(0) {
            if !pred(b) {
                break;
            }
            self.offset += 1;
        }
        self.position() - start
    }

    /// Advance one byte if it is `b`.
    #[inline]
    pub fn try_advance(&mut self, b: u8) -> bool {
        if self.peek(0) == Some(b) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    /// Advance past `seq` if the upcoming bytes match it entirely; otherwise
    /// leave the cursor where it is.
    pub fn try_advance_seq(&mut self, seq: &[u8]) -> bool {
        for (i, &expected) in seq.iter().enumerate() {
            if self.peek(i) != Some(expected) {
                return false;
            }
        }
        self.offset += seq.len();
        true
    }

    /// Stop before the next CR or LF (or at the end of the source).
    /// Returns the number of bytes advanced.
    pub fn advance_to_line_end(&mut self) -> usize {
        let mut advanced = 0;
        while self.peek(0).is_some() {
            let rest = &self.window[self.offset..self.count];
            if let Some(i) = memchr::memchr2(b'\r', b'\n', rest) {
                self.offset += i;
                return advanced + i;
            }
            self.offset += rest.len();
            advanced += rest.len();
        }
        advanced
    }

    #[inline]
    pub fn is_at_end(&mut self) -> bool {
        self.peek(0).is_none()
    }

    /// Absolute cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.basis + self.offset
    }

    // === Lexemes ===

    /// Enter lexeme mode at the cursor.
    #[inline]
    pub fn start_lexeme(&mut self) {
        self.lexeme_basis = Some(self.offset);
    }

    #[inline]
    pub fn stop_lexeme(&mut self) {
        self.lexeme_basis = None;
    }

    pub fn in_lexeme(&self) -> bool {
        self.lexeme_basis.is_some()
    }

    /// Absolute position where the current lexeme began (the cursor outside
    /// lexeme mode).
    #[inline]
    pub fn lexeme_start(&self) -> usize {
        self.basis + self.lexeme_basis.unwrap_or(self.offset)
    }

    #[inline]
    pub fn lexeme_width(&self) -> usize {
        self.offset - self.lexeme_basis.unwrap_or(self.offset)
    }

    /// Bytes from the lexeme start to the cursor, clamped to the end of the
    /// source.
    pub fn lexeme_bytes(&mut self) -> &[u8] {
        while self.offset > self.count && self.more_bytes() {}
        let start = self.lexeme_basis.unwrap_or(self.offset);
        let end = self.offset.min(self.count);
        &self.window[start.min(end)..end]
    }

    /// The lexeme as a shared, interned allocation.
    pub fn intern_lexeme(&mut self, interner: &mut ByteInterner) -> Arc<[u8]> {
        let bytes = self.lexeme_bytes();
        interner.intern(bytes)
    }

    /// The lexeme as text, for logging.
    pub fn lexeme_text_lossy(&mut self) -> String {
        String::from_utf8_lossy(self.lexeme_bytes()).into_owned()
    }

    // === Backtracking ===

    /// Move the cursor to absolute `position`.
    ///
    /// # Panics
    ///
    /// Panics when `position` lies before the current lexeme start.
    pub fn reset(&mut self, position: usize) {
        if let Some(lexeme_basis) = self.lexeme_basis {
            let lexeme_start = self.basis + lexeme_basis;
            assert!(
                position >= lexeme_start,
                "cannot reset to {position}, before the lexeme start {lexeme_start}"
            );
            // Keep the lexeme materialized; bytes up to `position` are
            // pulled in lazily.
            self.offset = position - self.basis;
            return;
        }
        if position >= self.basis && position <= self.basis + self.count {
            self.offset = position - self.basis;
        } else {
            self.basis = position;
            self.offset = 0;
            self.count = 0;
        }
    }
}
