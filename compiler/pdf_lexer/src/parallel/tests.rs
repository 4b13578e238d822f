use super::*;
use crate::{lex, OptionsError};
use pretty_assertions::assert_eq;

fn sources(texts: &[&[u8]]) -> Vec<SourceBuffer> {
    texts
        .iter()
        .map(|t| SourceBuffer::from_bytes(t).unwrap_or_else(|e| panic!("{e}")))
        .collect()
}

#[test]
fn results_keep_input_order() {
    let sources = sources(&[b"1 0 obj", b"/Type /Page", b"", b"<< >>"]);
    let streams = lex_parallel(&sources, &LexerOptions::default()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(streams.len(), 4);
    for (source, stream) in sources.iter().zip(&streams) {
        assert_eq!(stream, &lex(source));
    }
    assert_eq!(streams[2].len(), 1);
}

#[test]
fn empty_input_gives_no_streams() {
    let streams = lex_parallel(&[], &LexerOptions::default()).unwrap_or_else(|e| panic!("{e}"));
    assert!(streams.is_empty());
}

#[test]
fn options_are_validated_first() {
    let options = LexerOptions {
        window_capacity: 1,
        ..LexerOptions::default()
    };
    assert_eq!(
        lex_parallel(&sources(&[b"1"]), &options),
        Err(LexerError::Options(OptionsError::WindowTooSmall {
            capacity: 1,
            min: 16
        }))
    );
}

#[test]
fn options_reach_every_worker() {
    let options = LexerOptions {
        max_name_length: 1,
        ..LexerOptions::default()
    };
    let sources = sources(&[b"/AB", b"/CD", b"/E"]);
    let streams = lex_parallel(&sources, &options).unwrap_or_else(|e| panic!("{e}"));
    let flagged: Vec<bool> = streams.iter().map(|s| s[0].has_diagnostics()).collect();
    assert_eq!(flagged, [true, true, false]);
}

#[test]
fn token_cache_size_reaches_every_worker() {
    // With one slot, `true ` evicts `null ` before it is seen again.
    let options = LexerOptions {
        token_cache_size: 1,
        ..LexerOptions::default()
    };
    let alternating = sources(&[b"null true null ", b"null true null "]);
    let streams = lex_parallel(&alternating, &options).unwrap_or_else(|e| panic!("{e}"));
    for stream in &streams {
        assert_eq!(stream[0], stream[2]);
        assert!(!Arc::ptr_eq(&stream[0], &stream[2]));
    }

    let repeated = sources(&[b"null null "]);
    let streams = lex_parallel(&repeated, &options).unwrap_or_else(|e| panic!("{e}"));
    assert!(Arc::ptr_eq(&streams[0][0], &streams[0][1]));
}
