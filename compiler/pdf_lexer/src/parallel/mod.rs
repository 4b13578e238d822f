//! Lexing many independent sources at once.

use std::sync::Arc;

use pdf_lexer_core::SourceBuffer;
use pdf_syntax::GreenToken;
use rayon::prelude::*;
use tracing::debug;

use crate::{Lexer, LexerCache, LexerError, LexerOptions};

/// Lex every source on the rayon pool, returning token streams in input
/// order.
///
/// Each worker lexes with its own [`LexerCache`], a fork of one built by
/// [`LexerCache::shared_with`] from `options`, so keywords and interned
/// text seen by one worker are visible to the others.
pub fn lex_parallel(
    sources: &[SourceBuffer],
    options: &LexerOptions,
) -> Result<Vec<Vec<Arc<GreenToken>>>, LexerError> {
    let prototype = LexerCache::shared_with(options)?;
    debug!(sources = sources.len(), "parallel lexing started");
    let streams: Vec<Vec<Arc<GreenToken>>> = sources
        .par_iter()
        .map_init(|| prototype.fork(), |cache, source| {
            Lexer::with_validated_options(source, cache, options.clone()).collect::<Vec<_>>()
        })
        .collect();
    Ok(streams)
}

#[cfg(test)]
mod tests;
