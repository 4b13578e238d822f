//! Red nodes: a green node viewed at an absolute position.
//!
//! Red nodes are created on demand while walking down from a root and are
//! cheap to throw away. They are how relative diagnostic offsets become
//! absolute source spans.

use std::sync::{Arc, OnceLock};

use pdf_cache::{AuxStack, ObjectPool, PoolConfig};
use pdf_diagnostic::SyntaxDiagnosticInfo;

use crate::{GreenNode, GreenToken, SyntaxKind, TextSpan};

static WALK_POOL: OnceLock<ObjectPool<AuxStack<SyntaxNode>>> = OnceLock::new();

fn walk_pool() -> &'static ObjectPool<AuxStack<SyntaxNode>> {
    WALK_POOL.get_or_init(|| ObjectPool::new(PoolConfig::new(8, 32, 4096)))
}

/// A green node plus the absolute position of its first byte (leading
/// trivia included).
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxNode {
    green: GreenNode,
    position: u32,
}

impl SyntaxNode {
    pub fn new_root(green: GreenNode) -> Self {
        SyntaxNode { green, position: 0 }
    }

    pub fn new(green: GreenNode, position: u32) -> Self {
        SyntaxNode { green, position }
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn kind(&self) -> SyntaxKind {
        self.green.kind()
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn as_token(&self) -> Option<&Arc<GreenToken>> {
        self.green.as_token()
    }

    /// Span including the outermost trivia.
    pub fn full_span(&self) -> TextSpan {
        TextSpan::at(self.position, self.green.full_width())
    }

    /// Span without the outermost trivia.
    pub fn span(&self) -> TextSpan {
        TextSpan::at(
            self.position + self.green.leading_trivia_width(),
            self.green.width(),
        )
    }

    pub fn child(&self, index: usize) -> Option<SyntaxNode> {
        let green = self.green.slot(index)?;
        Some(SyntaxNode {
            green: green.clone(),
            position: self.position + self.green.slot_offset(index),
        })
    }

    /// Present children in slot order.
    pub fn children(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        let mut position = self.position;
        (0..self.green.slot_count()).filter_map(move |i| {
            let green = self.green.slot(i)?;
            let child = SyntaxNode {
                green: green.clone(),
                position,
            };
            position += green.full_width();
            Some(child)
        })
    }

    /// Every token in the subtree, in source order.
    pub fn descendant_tokens(&self) -> Vec<SyntaxNode> {
        let mut stack = walk_pool().rent();
        let mut tokens = Vec::new();
        stack.push(self.clone());
        while let Some(node) = stack.pop() {
            if node.green.is_token() {
                tokens.push(node);
                continue;
            }
            let children: Vec<SyntaxNode> = node.children().collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }
        tokens
    }

    /// Diagnostics of every token in the subtree, with absolute spans.
    pub fn diagnostics(&self) -> Vec<(TextSpan, SyntaxDiagnosticInfo)> {
        self.descendant_tokens()
            .iter()
            .flat_map(|token| {
                let position = token.position;
                token
                    .green
                    .diagnostics()
                    .iter()
                    .map(move |d| (TextSpan::at(position + d.offset(), d.width()), d.clone()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
