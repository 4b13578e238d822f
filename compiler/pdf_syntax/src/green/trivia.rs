use std::sync::Arc;

use super::width_of;
use crate::SyntaxKind;

/// Whitespace, an end of line, or a comment. Never has trivia of its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GreenTrivia {
    kind: SyntaxKind,
    text: Arc<[u8]>,
}

impl GreenTrivia {
    pub fn new(kind: SyntaxKind, text: Arc<[u8]>) -> Self {
        assert!(kind.is_trivia(), "{kind} is not a trivia kind");
        GreenTrivia { kind, text }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    #[inline]
    pub fn width(&self) -> u32 {
        width_of(&self.text)
    }
}
