use pdf_cache::CacheError;
use pdf_lexer_core::SourceError;
use thiserror::Error;

/// Invalid [`LexerOptions`](crate::LexerOptions).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("window capacity {capacity} is below the minimum of {min}")]
    WindowTooSmall { capacity: usize, min: usize },
    #[error("invalid {what} configuration")]
    Cache {
        what: &'static str,
        #[source]
        source: CacheError,
    },
}

/// Anything that can stop a lexer from being set up.
///
/// Problems in the input itself are never errors; they are diagnostics on
/// the tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Options(#[from] OptionsError),
}
