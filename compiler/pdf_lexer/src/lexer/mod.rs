//! The token driver.
//!
//! Each call to [`Lexer::next_token`] scans leading trivia, one token, and
//! trailing trivia up to and including the first end of line. The token is
//! scanned in lexeme mode so the window keeps its bytes contiguous, then the
//! text is interned and the green token is built (or fetched from the token
//! cache when the same full text was seen before).
//!
//! Scanners live in sibling files as `impl Lexer` blocks:
//! - `trivia.rs`: white-space, end-of-line and comment runs
//! - `literals.rs`: numbers, strings, hex strings, names and keywords

mod literals;
mod trivia;

use std::iter::FusedIterator;
use std::sync::Arc;

use pdf_cache::global_byte_pool;
use pdf_diagnostic::{ErrorCode, SyntaxDiagnosticInfo};
use pdf_lexer_core::{char_class, SlidingWindow, SourceBuffer};
use pdf_syntax::{GreenNode, GreenToken, SyntaxKind, TokenValue};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{LexerCache, LexerError, LexerOptions};

/// Sources are at most `u32::MAX` bytes, so offsets always fit.
#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Incremental lexer over one [`SourceBuffer`].
///
/// Yields tokens until (and including) a single `EndOfFile` token.
pub struct Lexer<'a> {
    window: SlidingWindow<'a>,
    cache: &'a mut LexerCache,
    options: LexerOptions,
    /// Diagnostics of the token being scanned, relative to its lexeme.
    diagnostics: SmallVec<[SyntaxDiagnosticInfo; 2]>,
    token_count: usize,
    diagnostic_count: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a SourceBuffer, cache: &'a mut LexerCache) -> Self {
        Self::with_validated_options(source, cache, LexerOptions::default())
    }

    pub fn with_options(
        source: &'a SourceBuffer,
        cache: &'a mut LexerCache,
        options: LexerOptions,
    ) -> Result<Self, LexerError> {
        options.validate()?;
        Ok(Self::with_validated_options(source, cache, options))
    }

    pub(crate) fn with_validated_options(
        source: &'a SourceBuffer,
        cache: &'a mut LexerCache,
        options: LexerOptions,
    ) -> Self {
        debug!(
            len = source.len(),
            window = options.window_capacity,
            "lexing started"
        );
        Lexer {
            window: SlidingWindow::new(source, options.window_capacity),
            cache,
            options,
            diagnostics: SmallVec::new(),
            token_count: 0,
            diagnostic_count: 0,
            finished: false,
        }
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Absolute position of the next unread byte.
    pub fn position(&self) -> usize {
        self.window.position()
    }

    /// Rewind to the start of the source.
    pub fn restart(&mut self) {
        self.window.stop_lexeme();
        self.window.reset(0);
        self.diagnostics.clear();
        self.token_count = 0;
        self.diagnostic_count = 0;
        self.finished = false;
        debug!("lexer restarted");
    }

    /// Scan the next token. At the end of input this returns an
    /// `EndOfFile` token (again on every further call).
    pub fn next_token(&mut self) -> Arc<GreenToken> {
        let start = self.window.position();
        self.diagnostics.clear();

        let leading = self.scan_trivia(false);
        self.window.start_lexeme();
        let (kind, value) = self.scan_token();
        let text = self.window.intern_lexeme(&mut self.cache.interner);
        self.window.stop_lexeme();
        let trailing = self.scan_trivia(true);

        let token = self.finish_token(kind, text, value, leading, trailing);
        self.token_count += 1;
        self.diagnostic_count += token.diagnostics().len();
        trace!(
            kind = %token.kind(),
            position = start,
            width = token.full_width(),
            "token"
        );
        if kind == SyntaxKind::EndOfFile {
            debug!(
                tokens = self.token_count,
                diagnostics = self.diagnostic_count,
                "lexing finished"
            );
        }
        token
    }

    /// Dispatch on the first byte of a token. Trivia was already consumed.
    fn scan_token(&mut self) -> (SyntaxKind, TokenValue) {
        let Some(b) = self.window.peek(0) else {
            return (SyntaxKind::EndOfFile, TokenValue::None);
        };
        match b {
            b'[' => self.punctuation(SyntaxKind::OpenBracket),
            b']' => self.punctuation(SyntaxKind::CloseBracket),
            b'{' => self.punctuation(SyntaxKind::OpenBrace),
            b'}' => self.punctuation(SyntaxKind::CloseBrace),
            b'<' => {
                if self.window.try_advance_seq(b"<<") {
                    (SyntaxKind::LessThanLessThan, TokenValue::None)
                } else {
                    self.scan_hex_string()
                }
            }
            b'>' => {
                if self.window.try_advance_seq(b">>") {
                    (SyntaxKind::GreaterThanGreaterThan, TokenValue::None)
                } else {
                    self.scan_bad_byte(b)
                }
            }
            b'(' => self.scan_string(),
            b'/' => self.scan_name(),
            b'+' | b'-' | b'.' | b'0'..=b'9' => self.scan_number(),
            b if char_class::is_letter(b) => self.scan_keyword(),
            _ => self.scan_bad_byte(b),
        }
    }

    fn punctuation(&mut self, kind: SyntaxKind) -> (SyntaxKind, TokenValue) {
        self.window.advance(1);
        (kind, TokenValue::None)
    }

    /// One byte that cannot start a token, including a stray `>` or `)`.
    fn scan_bad_byte(&mut self, b: u8) -> (SyntaxKind, TokenValue) {
        let diagnostic = self.cursor_diagnostic(ErrorCode::E0009, 1).with_arg(b);
        self.report(diagnostic);
        self.window.advance(1);
        (SyntaxKind::BadToken, TokenValue::None)
    }

    /// Build the green token, sharing a cached instance when one with the
    /// same full text exists.
    fn finish_token(
        &mut self,
        kind: SyntaxKind,
        text: Arc<[u8]>,
        value: TokenValue,
        leading: Option<GreenNode>,
        trailing: Option<GreenNode>,
    ) -> Arc<GreenToken> {
        if !self.diagnostics.is_empty() {
            let shift = leading.as_ref().map_or(0, GreenNode::full_width);
            let diagnostics: SmallVec<[SyntaxDiagnosticInfo; 2]> = self
                .diagnostics
                .iter()
                .map(|d| d.with_offset(d.offset() + shift))
                .collect();
            let token = GreenToken::new(kind, text, value, leading, trailing);
            return Arc::new(token.with_diagnostics(&diagnostics));
        }

        let full_width = leading.as_ref().map_or(0, GreenNode::full_width)
            + to_u32(text.len())
            + trailing.as_ref().map_or(0, GreenNode::full_width);
        if full_width > to_u32(self.options.max_cached_token_width) {
            return Arc::new(GreenToken::new(kind, text, value, leading, trailing));
        }

        let mut key = global_byte_pool().rent();
        if let Some(leading) = &leading {
            leading.write_to(&mut key, true, true);
        }
        key.extend_from_slice(&text);
        if let Some(trailing) = &trailing {
            trailing.write_to(&mut key, true, true);
        }
        if let Some(cached) = self.cache.cached_token(&key) {
            assert_eq!(cached.kind(), kind, "token cache returned a different kind");
            return cached;
        }
        let token = Arc::new(GreenToken::new(kind, text, value, leading, trailing));
        self.cache.cache_token(&key, &token);
        token
    }

    // === Diagnostics ===

    /// Offset of the cursor from the start of the current lexeme.
    #[inline]
    fn lexeme_offset(&self) -> usize {
        self.window.position() - self.window.lexeme_start()
    }

    /// A diagnostic of `width` bytes starting at the cursor.
    fn cursor_diagnostic(&self, code: ErrorCode, width: usize) -> SyntaxDiagnosticInfo {
        SyntaxDiagnosticInfo::new(code, to_u32(self.lexeme_offset()), to_u32(width))
    }

    /// A diagnostic covering the lexeme scanned so far.
    fn lexeme_diagnostic(&self, code: ErrorCode) -> SyntaxDiagnosticInfo {
        SyntaxDiagnosticInfo::new(code, 0, to_u32(self.window.lexeme_width()))
    }

    #[inline]
    fn report(&mut self, diagnostic: SyntaxDiagnosticInfo) {
        self.diagnostics.push(diagnostic);
    }
}

impl Iterator for Lexer<'_> {
    type Item = Arc<GreenToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind() == SyntaxKind::EndOfFile;
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.window.position())
            .field("tokens", &self.token_count)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
