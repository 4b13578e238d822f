//! Property-based tests over whole token streams.
//!
//! Inputs are random bytes and random concatenations of PDF fragments
//! (delimiters, escapes, numbers, keywords, line ends). For every input:
//! 1. Round trip: the full text of all tokens is the input.
//! 2. Widths: every token's full width is its trivia plus its text, and the
//!    widths add up to the input length.
//! 3. Shape: exactly one `EndOfFile`, at the end; trailing trivia ends at
//!    its first line break.
//! 4. Determinism: restarting, shrinking the window, and lexing in parallel
//!    give the same tokens.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::sync::Arc;

use pdf_lexer::{
    lex, lex_parallel, GreenToken, Lexer, LexerCache, LexerOptions, SourceBuffer, SyntaxKind,
};
use proptest::prelude::*;

// -- Strategies --

const FRAGMENTS: &[&[u8]] = &[
    b" ", b"  ", b"\t", b"\0", b"\x0C", b"\n", b"\r", b"\r\n", b"%c", b"% comment",
    b"(", b")", b"\\", b"\\n", b"\\1", b"\\400", b"<", b">", b"<<", b">>", b"[", b"]",
    b"{", b"}", b"/", b"/Type", b"#", b"#2", b"#41", b"1", b"-", b"+", b".", b"12.5",
    b"2147483648", b"obj", b"endobj", b"true", b"R", b"xyz", b"AB", b"\x80",
];

/// Byte strings biased toward PDF syntax.
fn pdf_like() -> impl Strategy<Value = Vec<u8>> {
    let piece = prop_oneof![
        4 => prop::sample::select(FRAGMENTS).prop_map(|f| f.to_vec()),
        1 => any::<u8>().prop_map(|b| vec![b]),
    ];
    prop::collection::vec(piece, 0..64).prop_map(|pieces| pieces.concat())
}

fn any_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

// -- Helpers --

fn source(bytes: &[u8]) -> SourceBuffer {
    SourceBuffer::from_bytes(bytes).unwrap()
}

fn full_text(tokens: &[Arc<GreenToken>]) -> Vec<u8> {
    let mut out = Vec::new();
    for token in tokens {
        token.write_to(&mut out, true, true);
    }
    out
}

fn check_stream(input: &[u8], tokens: &[Arc<GreenToken>]) -> Result<(), TestCaseError> {
    prop_assert_eq!(full_text(tokens), input);

    let total: usize = tokens.iter().map(|t| t.full_width() as usize).sum();
    prop_assert_eq!(total, input.len());

    let eof = tokens
        .iter()
        .filter(|t| t.kind() == SyntaxKind::EndOfFile)
        .count();
    prop_assert_eq!(eof, 1);
    prop_assert_eq!(tokens.last().map(|t| t.kind()), Some(SyntaxKind::EndOfFile));

    for token in tokens {
        prop_assert_eq!(
            token.full_width(),
            token.leading_trivia_width() + token.width() + token.trailing_trivia_width()
        );
        for diagnostic in token.diagnostics() {
            prop_assert!(diagnostic.offset() + diagnostic.width() <= token.full_width());
        }
        if let Some(trailing) = token.trailing_trivia() {
            let text = trailing.to_full_bytes();
            if let Some(i) = text.iter().position(|&b| b == b'\r' || b == b'\n') {
                let rest = &text[i..];
                prop_assert!(
                    rest == b"\n" || rest == b"\r" || rest == b"\r\n",
                    "trailing trivia continues past its line break: {:?}",
                    text
                );
            }
        }
    }
    Ok(())
}

// -- Properties --

proptest! {
    #[test]
    fn pdf_like_inputs_round_trip(input in pdf_like()) {
        check_stream(&input, &lex(&source(&input)))?;
    }

    #[test]
    fn arbitrary_bytes_round_trip(input in any_bytes()) {
        check_stream(&input, &lex(&source(&input)))?;
    }

    #[test]
    fn window_size_does_not_change_tokens(input in pdf_like(), capacity in 16_usize..64) {
        let src = source(&input);
        let options = LexerOptions { window_capacity: capacity, ..LexerOptions::default() };
        let mut cache = LexerCache::new(&options).unwrap();
        let small: Vec<_> = Lexer::with_options(&src, &mut cache, options).unwrap().collect();
        prop_assert_eq!(small, lex(&src));
    }

    #[test]
    fn restart_is_deterministic(input in pdf_like()) {
        let src = source(&input);
        let mut cache = LexerCache::shared();
        let mut lexer = Lexer::new(&src, &mut cache);
        let first: Vec<_> = lexer.by_ref().collect();
        lexer.restart();
        let second: Vec<_> = lexer.collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parallel_matches_sequential(inputs in prop::collection::vec(pdf_like(), 0..8)) {
        let sources: Vec<SourceBuffer> = inputs.iter().map(|i| source(i)).collect();
        let parallel = lex_parallel(&sources, &LexerOptions::default()).unwrap();
        let sequential: Vec<_> = sources.iter().map(lex).collect();
        prop_assert_eq!(parallel, sequential);
    }
}
