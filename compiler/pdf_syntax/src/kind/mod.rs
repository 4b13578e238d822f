//! Syntax kinds for tokens, trivia and composite nodes.

use std::fmt;

/// Kind of a green node.
///
/// One flat enum covers tokens, trivia, lists and composites so every node
/// can report its kind without knowing its layer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u16)]
pub enum SyntaxKind {
    None,

    // === Special tokens ===
    EndOfFile,
    /// A byte (or stray delimiter) that cannot start any token.
    BadToken,
    /// A run of letters that is not a keyword.
    UnknownKeyword,

    // === Punctuation ===
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    /// `<<`
    LessThanLessThan,
    /// `>>`
    GreaterThanGreaterThan,

    // === Literals ===
    NumericLiteral,
    StringLiteral,
    HexStringLiteral,
    NameLiteral,

    // === Keywords ===
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    ObjKeyword,
    EndObjKeyword,
    StreamKeyword,
    EndStreamKeyword,
    /// `R`, the indirect reference marker.
    RKeyword,
    XRefKeyword,
    TrailerKeyword,
    StartXRefKeyword,
    /// `f`, a free cross-reference entry.
    FKeyword,
    /// `n`, an in-use cross-reference entry.
    NKeyword,

    // === Trivia ===
    WhitespaceTrivia,
    EndOfLineTrivia,
    SingleLineCommentTrivia,

    // === Nodes ===
    List,
    ArrayExpression,
    DictionaryExpression,
    IndirectReference,
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::WhitespaceTrivia
                | SyntaxKind::EndOfLineTrivia
                | SyntaxKind::SingleLineCommentTrivia
        )
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::ObjKeyword
                | SyntaxKind::EndObjKeyword
                | SyntaxKind::StreamKeyword
                | SyntaxKind::EndStreamKeyword
                | SyntaxKind::RKeyword
                | SyntaxKind::XRefKeyword
                | SyntaxKind::TrailerKeyword
                | SyntaxKind::StartXRefKeyword
                | SyntaxKind::FKeyword
                | SyntaxKind::NKeyword
        )
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            SyntaxKind::OpenBracket
                | SyntaxKind::CloseBracket
                | SyntaxKind::OpenBrace
                | SyntaxKind::CloseBrace
                | SyntaxKind::LessThanLessThan
                | SyntaxKind::GreaterThanGreaterThan
        )
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::NumericLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::HexStringLiteral
                | SyntaxKind::NameLiteral
        )
    }

    /// Kinds produced by the lexer as tokens.
    #[inline]
    pub fn is_token(self) -> bool {
        matches!(
            self,
            SyntaxKind::EndOfFile | SyntaxKind::BadToken | SyntaxKind::UnknownKeyword
        ) || self.is_punctuation()
            || self.is_literal()
            || self.is_keyword()
    }

    /// Interior node kinds; `List` has no composite form.
    #[inline]
    pub fn is_node(self) -> bool {
        matches!(
            self,
            SyntaxKind::ArrayExpression
                | SyntaxKind::DictionaryExpression
                | SyntaxKind::IndirectReference
        )
    }

    /// The fixed source text of punctuation and keyword kinds.
    pub fn text(self) -> Option<&'static [u8]> {
        Some(match self {
            SyntaxKind::OpenBracket => b"[",
            SyntaxKind::CloseBracket => b"]",
            SyntaxKind::OpenBrace => b"{",
            SyntaxKind::CloseBrace => b"}",
            SyntaxKind::LessThanLessThan => b"<<",
            SyntaxKind::GreaterThanGreaterThan => b">>",
            SyntaxKind::TrueKeyword => b"true",
            SyntaxKind::FalseKeyword => b"false",
            SyntaxKind::NullKeyword => b"null",
            SyntaxKind::ObjKeyword => b"obj",
            SyntaxKind::EndObjKeyword => b"endobj",
            SyntaxKind::StreamKeyword => b"stream",
            SyntaxKind::EndStreamKeyword => b"endstream",
            SyntaxKind::RKeyword => b"R",
            SyntaxKind::XRefKeyword => b"xref",
            SyntaxKind::TrailerKeyword => b"trailer",
            SyntaxKind::StartXRefKeyword => b"startxref",
            SyntaxKind::FKeyword => b"f",
            SyntaxKind::NKeyword => b"n",
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            SyntaxKind::None => "None",
            SyntaxKind::EndOfFile => "EndOfFile",
            SyntaxKind::BadToken => "BadToken",
            SyntaxKind::UnknownKeyword => "UnknownKeyword",
            SyntaxKind::OpenBracket => "OpenBracket",
            SyntaxKind::CloseBracket => "CloseBracket",
            SyntaxKind::OpenBrace => "OpenBrace",
            SyntaxKind::CloseBrace => "CloseBrace",
            SyntaxKind::LessThanLessThan => "LessThanLessThan",
            SyntaxKind::GreaterThanGreaterThan => "GreaterThanGreaterThan",
            SyntaxKind::NumericLiteral => "NumericLiteral",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::HexStringLiteral => "HexStringLiteral",
            SyntaxKind::NameLiteral => "NameLiteral",
            SyntaxKind::TrueKeyword => "TrueKeyword",
            SyntaxKind::FalseKeyword => "FalseKeyword",
            SyntaxKind::NullKeyword => "NullKeyword",
            SyntaxKind::ObjKeyword => "ObjKeyword",
            SyntaxKind::EndObjKeyword => "EndObjKeyword",
            SyntaxKind::StreamKeyword => "StreamKeyword",
            SyntaxKind::EndStreamKeyword => "EndStreamKeyword",
            SyntaxKind::RKeyword => "RKeyword",
            SyntaxKind::XRefKeyword => "XRefKeyword",
            SyntaxKind::TrailerKeyword => "TrailerKeyword",
            SyntaxKind::StartXRefKeyword => "StartXRefKeyword",
            SyntaxKind::FKeyword => "FKeyword",
            SyntaxKind::NKeyword => "NKeyword",
            SyntaxKind::WhitespaceTrivia => "WhitespaceTrivia",
            SyntaxKind::EndOfLineTrivia => "EndOfLineTrivia",
            SyntaxKind::SingleLineCommentTrivia => "SingleLineCommentTrivia",
            SyntaxKind::List => "List",
            SyntaxKind::ArrayExpression => "ArrayExpression",
            SyntaxKind::DictionaryExpression => "DictionaryExpression",
            SyntaxKind::IndirectReference => "IndirectReference",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
