//! Lexer for PDF syntax.
//!
//! Turns a [`SourceBuffer`] into a stream of green tokens. Every token owns
//! its leading and trailing trivia, so concatenating the full text of all
//! tokens reproduces the input byte for byte. Malformed input never stops
//! the lexer; problems are attached to tokens as diagnostics.
//!
//! ```text
//! SourceBuffer -> SlidingWindow -> Lexer -> Arc<GreenToken> ...
//!                                    |
//!                                LexerCache (keywords, interner,
//!                                            tokens, trivia)
//! ```
//!
//! # Tracing
//!
//! Call [`init_tracing`] once, then:
//! - `RUST_LOG=pdf_lexer=debug`: lexer start and finish with token and
//!   diagnostic counts.
//! - `RUST_LOG=pdf_lexer=trace`: every token with kind, position and width.

mod context;
mod error;
mod keywords;
mod lexer;
mod options;
mod parallel;

use std::sync::{Arc, Once};

pub use context::LexerCache;
pub use error::{LexerError, OptionsError};
pub use keywords::{lookup as lookup_keyword, KEYWORDS};
pub use lexer::Lexer;
pub use options::LexerOptions;
pub use parallel::lex_parallel;

pub use pdf_lexer_core::{SourceBuffer, SourceError};
pub use pdf_syntax::{GreenToken, SyntaxKind, TokenValue};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and nothing after the first call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Lex a whole source with a cache over the process-wide shared tiers.
pub fn lex(source: &SourceBuffer) -> Vec<Arc<GreenToken>> {
    let mut cache = LexerCache::shared();
    Lexer::new(source, &mut cache).collect()
}

/// Copy `bytes` into a new [`SourceBuffer`] and lex it.
pub fn lex_bytes(bytes: &[u8]) -> Result<Vec<Arc<GreenToken>>, LexerError> {
    let source = SourceBuffer::from_bytes(bytes)?;
    Ok(lex(&source))
}
