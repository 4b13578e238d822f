use std::sync::Arc;

use pdf_diagnostic::SyntaxDiagnosticInfo;

use super::{width_of, GreenNode};
use crate::{NodeFlags, SyntaxKind, TokenValue};

/// An immutable token with its trivia, value and diagnostics.
///
/// Tokens carry no position, so one instance can be shared by every place
/// the same text (trivia included) occurs.
#[derive(Clone, Debug, PartialEq)]
pub struct GreenToken {
    kind: SyntaxKind,
    text: Arc<[u8]>,
    value: TokenValue,
    leading: Option<GreenNode>,
    trailing: Option<GreenNode>,
    full_width: u32,
    flags: NodeFlags,
    diagnostics: Option<Arc<[SyntaxDiagnosticInfo]>>,
}

impl GreenToken {
    pub fn new(
        kind: SyntaxKind,
        text: Arc<[u8]>,
        value: TokenValue,
        leading: Option<GreenNode>,
        trailing: Option<GreenNode>,
    ) -> Self {
        assert!(kind.is_token(), "{kind} is not a token kind");
        let leading_width = leading.as_ref().map_or(0, GreenNode::full_width);
        let trailing_width = trailing.as_ref().map_or(0, GreenNode::full_width);
        let mut flags = NodeFlags::IS_CACHEABLE;
        if leading.is_some() || trailing.is_some() {
            flags |= NodeFlags::CONTAINS_TRIVIA;
        }
        GreenToken {
            kind,
            full_width: leading_width + width_of(&text) + trailing_width,
            text,
            value,
            leading,
            trailing,
            flags,
            diagnostics: None,
        }
    }

    /// A copy of this token carrying `diagnostics` instead of its own.
    ///
    /// Offsets are relative to the start of the token, leading trivia
    /// included. An empty list is the same as no diagnostics.
    #[must_use]
    pub fn with_diagnostics(&self, diagnostics: &[SyntaxDiagnosticInfo]) -> GreenToken {
        let mut token = self.clone();
        if diagnostics.is_empty() {
            token.diagnostics = None;
            token.flags.remove(NodeFlags::CONTAINS_DIAGNOSTICS);
            token.flags.insert(NodeFlags::IS_CACHEABLE);
        } else {
            token.diagnostics = Some(Arc::from(diagnostics));
            token.flags.insert(NodeFlags::CONTAINS_DIAGNOSTICS);
            token.flags.remove(NodeFlags::IS_CACHEABLE);
        }
        token
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    /// Raw source text, without trivia.
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    #[inline]
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    pub fn leading_trivia(&self) -> Option<&GreenNode> {
        self.leading.as_ref()
    }

    pub fn trailing_trivia(&self) -> Option<&GreenNode> {
        self.trailing.as_ref()
    }

    /// Width of the text alone.
    #[inline]
    pub fn width(&self) -> u32 {
        width_of(&self.text)
    }

    #[inline]
    pub fn full_width(&self) -> u32 {
        self.full_width
    }

    pub fn leading_trivia_width(&self) -> u32 {
        self.leading.as_ref().map_or(0, GreenNode::full_width)
    }

    pub fn trailing_trivia_width(&self) -> u32 {
        self.trailing.as_ref().map_or(0, GreenNode::full_width)
    }

    #[inline]
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub fn diagnostics(&self) -> &[SyntaxDiagnosticInfo] {
        self.diagnostics.as_deref().unwrap_or(&[])
    }

    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }

    /// The integer value, or 0 for anything but an in-range integer.
    pub fn integer_value(&self) -> i32 {
        match self.value {
            TokenValue::Integer(n) => n,
            _ => 0,
        }
    }

    /// The numeric value as a real, or 0.0 for non-numeric tokens.
    pub fn real_value(&self) -> f64 {
        match self.value {
            TokenValue::Real(r) => r,
            TokenValue::Integer(n) => f64::from(n),
            _ => 0.0,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>, leading: bool, trailing: bool) {
        if leading {
            if let Some(trivia) = &self.leading {
                trivia.write_to(out, true, true);
            }
        }
        out.extend_from_slice(&self.text);
        if trailing {
            if let Some(trivia) = &self.trailing {
                trivia.write_to(out, true, true);
            }
        }
    }
}
