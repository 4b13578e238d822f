//! Syntax nodes for PDF tokens.
//!
//! Two layers:
//! - **Green** ([`GreenNode`]): immutable, position-free, reference-counted.
//!   Identical tokens (same kind, text and trivia) can share one instance.
//! - **Red** ([`SyntaxNode`]): a green node plus an absolute position,
//!   created on demand while walking from a root.
//!
//! Widths and positions are `u32`; the lexer refuses inputs larger than
//! `u32::MAX` bytes.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod flags;
mod green;
mod kind;
mod red;
mod span;
mod value;

pub use flags::NodeFlags;
pub use green::{GreenComposite, GreenList, GreenNode, GreenToken, GreenTrivia};
pub use kind::SyntaxKind;
pub use red::SyntaxNode;
pub use span::TextSpan;
pub use value::TokenValue;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{GreenNode, NodeFlags, SyntaxKind, TextSpan, TokenValue};
    // Tag + one Arc pointer.
    crate::static_assert_size!(GreenNode, 16);
    crate::static_assert_size!(SyntaxKind, 2);
    crate::static_assert_size!(NodeFlags, 1);
    crate::static_assert_size!(TextSpan, 8);
    // Largest payload is an `Arc<[u8]>` fat pointer.
    crate::static_assert_size!(TokenValue, 24);
}
