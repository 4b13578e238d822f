//! Green nodes: immutable, position-free, shareable.
//!
//! A green node knows its kind, its full width (trivia included) and its
//! children, but not where it sits in the source. That makes identical
//! subtrees interchangeable, so the lexer can hand out one cached instance
//! for every occurrence of the same token text.
//!
//! Width rules:
//! - token: `full_width = leading + text + trailing`
//! - composite, list: `full_width = sum of children's full widths`
//! - trivia: `full_width = text`, and no trivia of its own

mod composite;
mod dump;
mod token;
mod trivia;

use std::sync::Arc;

use pdf_diagnostic::SyntaxDiagnosticInfo;

use crate::{NodeFlags, SyntaxKind};

pub use composite::{GreenComposite, GreenList};
pub use token::GreenToken;
pub use trivia::GreenTrivia;

/// Width of a byte run.
///
/// Source buffers are limited to `u32::MAX` bytes, so every run taken from
/// one fits.
#[inline]
pub(crate) fn width_of(bytes: &[u8]) -> u32 {
    u32::try_from(bytes.len()).unwrap_or(u32::MAX)
}

/// A node of any layer. Cloning is a reference-count increment.
#[derive(Clone, Debug, PartialEq)]
pub enum GreenNode {
    Token(Arc<GreenToken>),
    Trivia(Arc<GreenTrivia>),
    Composite(Arc<GreenComposite>),
    List(Arc<GreenList>),
}

impl GreenNode {
    /// Combine scanned trivia pieces: none gives `None`, one gives the
    /// piece itself, more give a [`GreenList`].
    pub fn from_trivia(pieces: impl IntoIterator<Item = GreenNode>) -> Option<GreenNode> {
        let mut pieces = pieces.into_iter();
        let first = pieces.next()?;
        let Some(second) = pieces.next() else {
            return Some(first);
        };
        let list = GreenList::new([first, second].into_iter().chain(pieces));
        Some(GreenNode::List(Arc::new(list)))
    }

    pub fn kind(&self) -> SyntaxKind {
        match self {
            GreenNode::Token(t) => t.kind(),
            GreenNode::Trivia(t) => t.kind(),
            GreenNode::Composite(c) => c.kind(),
            GreenNode::List(_) => SyntaxKind::List,
        }
    }

    #[inline]
    pub fn is_token(&self) -> bool {
        matches!(self, GreenNode::Token(_))
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self, GreenNode::Trivia(_))
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, GreenNode::List(_))
    }

    pub fn as_token(&self) -> Option<&Arc<GreenToken>> {
        match self {
            GreenNode::Token(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_trivia(&self) -> Option<&Arc<GreenTrivia>> {
        match self {
            GreenNode::Trivia(t) => Some(t),
            _ => None,
        }
    }

    pub fn full_width(&self) -> u32 {
        match self {
            GreenNode::Token(t) => t.full_width(),
            GreenNode::Trivia(t) => t.width(),
            GreenNode::Composite(c) => c.full_width(),
            GreenNode::List(l) => l.full_width(),
        }
    }

    /// Width without the leading trivia of the first token and the
    /// trailing trivia of the last.
    pub fn width(&self) -> u32 {
        self.full_width() - self.leading_trivia_width() - self.trailing_trivia_width()
    }

    pub fn leading_trivia_width(&self) -> u32 {
        match self {
            GreenNode::Token(t) => t.leading_trivia_width(),
            GreenNode::Trivia(_) => 0,
            GreenNode::Composite(c) => c
                .slots()
                .iter()
                .flatten()
                .next()
                .map_or(0, GreenNode::leading_trivia_width),
            GreenNode::List(l) => l.children().first().map_or(0, GreenNode::leading_trivia_width),
        }
    }

    pub fn trailing_trivia_width(&self) -> u32 {
        match self {
            GreenNode::Token(t) => t.trailing_trivia_width(),
            GreenNode::Trivia(_) => 0,
            GreenNode::Composite(c) => c
                .slots()
                .iter()
                .rev()
                .flatten()
                .next()
                .map_or(0, GreenNode::trailing_trivia_width),
            GreenNode::List(l) => l.children().last().map_or(0, GreenNode::trailing_trivia_width),
        }
    }

    pub fn flags(&self) -> NodeFlags {
        match self {
            GreenNode::Token(t) => t.flags(),
            GreenNode::Trivia(_) => NodeFlags::CONTAINS_TRIVIA,
            GreenNode::Composite(c) => c.flags(),
            GreenNode::List(l) => l.flags(),
        }
    }

    #[inline]
    pub fn contains_diagnostics(&self) -> bool {
        self.flags().contains(NodeFlags::CONTAINS_DIAGNOSTICS)
    }

    /// Diagnostics attached to this node itself (not its descendants).
    pub fn diagnostics(&self) -> &[SyntaxDiagnosticInfo] {
        match self {
            GreenNode::Token(t) => t.diagnostics(),
            _ => &[],
        }
    }

    /// Number of child slots. Tokens and trivia have none.
    pub fn slot_count(&self) -> usize {
        match self {
            GreenNode::Token(_) | GreenNode::Trivia(_) => 0,
            GreenNode::Composite(c) => c.slots().len(),
            GreenNode::List(l) => l.children().len(),
        }
    }

    /// Child at `index`; `None` when out of range or missing.
    pub fn slot(&self, index: usize) -> Option<&GreenNode> {
        match self {
            GreenNode::Token(_) | GreenNode::Trivia(_) => None,
            GreenNode::Composite(c) => c.slots().get(index).and_then(Option::as_ref),
            GreenNode::List(l) => l.children().get(index),
        }
    }

    /// Offset of slot `index` from the start of this node.
    pub fn slot_offset(&self, index: usize) -> u32 {
        (0..index)
            .filter_map(|i| self.slot(i))
            .map(GreenNode::full_width)
            .sum()
    }

    /// Append the source text of this node.
    ///
    /// `leading` / `trailing` control whether the outermost trivia (of the
    /// first and last token) is written.
    pub fn write_to(&self, out: &mut Vec<u8>, leading: bool, trailing: bool) {
        match self {
            GreenNode::Token(t) => t.write_to(out, leading, trailing),
            GreenNode::Trivia(t) => out.extend_from_slice(t.text()),
            GreenNode::Composite(_) | GreenNode::List(_) => {
                let count = self.slot_count();
                let first = (0..count).find(|&i| self.slot(i).is_some());
                let last = (0..count).rev().find(|&i| self.slot(i).is_some());
                for i in 0..count {
                    if let Some(child) = self.slot(i) {
                        child.write_to(
                            out,
                            leading || Some(i) != first,
                            trailing || Some(i) != last,
                        );
                    }
                }
            }
        }
    }

    /// The full source text, trivia included.
    pub fn to_full_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.full_width() as usize);
        self.write_to(&mut out, true, true);
        out
    }

    /// The source text without outermost trivia.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width() as usize);
        self.write_to(&mut out, false, false);
        out
    }
}

impl From<GreenToken> for GreenNode {
    fn from(token: GreenToken) -> Self {
        GreenNode::Token(Arc::new(token))
    }
}

impl From<Arc<GreenToken>> for GreenNode {
    fn from(token: Arc<GreenToken>) -> Self {
        GreenNode::Token(token)
    }
}

impl From<GreenTrivia> for GreenNode {
    fn from(trivia: GreenTrivia) -> Self {
        GreenNode::Trivia(Arc::new(trivia))
    }
}

impl From<GreenComposite> for GreenNode {
    fn from(node: GreenComposite) -> Self {
        GreenNode::Composite(Arc::new(node))
    }
}

impl From<GreenList> for GreenNode {
    fn from(list: GreenList) -> Self {
        GreenNode::List(Arc::new(list))
    }
}

#[cfg(test)]
mod tests;
