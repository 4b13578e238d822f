//! Lexer configuration.

use pdf_cache::{FixedCache, TwoTierConfig};
use pdf_lexer_core::MIN_WINDOW_CAPACITY;

use crate::OptionsError;

/// Tunables for a [`Lexer`](crate::Lexer) and its [`LexerCache`](crate::LexerCache).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    /// Decoded names longer than this get a `NameTooLong` warning.
    pub max_name_length: usize,
    /// Warn when an integer literal overflows `i32` and is read as a real.
    pub report_integer_overflow: bool,
    /// Initial sliding window size in bytes.
    pub window_capacity: usize,
    pub keyword_cache: TwoTierConfig,
    /// Slots in the per-lexer token cache.
    pub token_cache_size: usize,
    /// Slots in the per-lexer trivia cache.
    pub trivia_cache_size: usize,
    pub interner: TwoTierConfig,
    /// Tokens (and trivia runs) wider than this are never cached.
    pub max_cached_token_width: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            max_name_length: 127,
            report_integer_overflow: false,
            window_capacity: 2048,
            keyword_cache: TwoTierConfig::new(64, 512, 8),
            token_cache_size: 256,
            trivia_cache_size: 64,
            interner: TwoTierConfig::new(256, 4096, 8),
            max_cached_token_width: 42,
        }
    }
}

impl LexerOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.window_capacity < MIN_WINDOW_CAPACITY {
            return Err(OptionsError::WindowTooSmall {
                capacity: self.window_capacity,
                min: MIN_WINDOW_CAPACITY,
            });
        }
        let cache = |what: &'static str| move |source| OptionsError::Cache { what, source };
        self.keyword_cache
            .validate()
            .map_err(cache("keyword cache"))?;
        self.interner.validate().map_err(cache("interner"))?;
        FixedCache::<(), ()>::new(self.token_cache_size).map_err(cache("token cache"))?;
        FixedCache::<(), ()>::new(self.trivia_cache_size).map_err(cache("trivia cache"))?;
        Ok(())
    }
}
