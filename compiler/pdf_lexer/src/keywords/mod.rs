//! Keyword recognition.
//!
//! The keyword set is fixed, so lookup is a match on length followed by a
//! match on the bytes. The lexer puts this behind its keyword cache; the
//! table itself is the source of truth.

use pdf_syntax::SyntaxKind;

/// Every keyword, in table order.
pub const KEYWORDS: [&[u8]; 13] = [
    b"true",
    b"false",
    b"null",
    b"obj",
    b"endobj",
    b"stream",
    b"endstream",
    b"R",
    b"xref",
    b"trailer",
    b"startxref",
    b"f",
    b"n",
];

/// Look up a run of letters. Anything outside the table is
/// [`SyntaxKind::UnknownKeyword`].
pub fn lookup(text: &[u8]) -> SyntaxKind {
    match text.len() {
        1 => match text {
            b"R" => SyntaxKind::RKeyword,
            b"f" => SyntaxKind::FKeyword,
            b"n" => SyntaxKind::NKeyword,
            _ => SyntaxKind::UnknownKeyword,
        },
        3 => match text {
            b"obj" => SyntaxKind::ObjKeyword,
            _ => SyntaxKind::UnknownKeyword,
        },
        4 => match text {
            b"true" => SyntaxKind::TrueKeyword,
            b"null" => SyntaxKind::NullKeyword,
            b"xref" => SyntaxKind::XRefKeyword,
            _ => SyntaxKind::UnknownKeyword,
        },
        5 => match text {
            b"false" => SyntaxKind::FalseKeyword,
            _ => SyntaxKind::UnknownKeyword,
        },
        6 => match text {
            b"endobj" => SyntaxKind::EndObjKeyword,
            b"stream" => SyntaxKind::StreamKeyword,
            _ => SyntaxKind::UnknownKeyword,
        },
        7 => match text {
            b"trailer" => SyntaxKind::TrailerKeyword,
            _ => SyntaxKind::UnknownKeyword,
        },
        9 => match text {
            b"endstream" => SyntaxKind::EndStreamKeyword,
            b"startxref" => SyntaxKind::StartXRefKeyword,
            _ => SyntaxKind::UnknownKeyword,
        },
        _ => SyntaxKind::UnknownKeyword,
    }
}
