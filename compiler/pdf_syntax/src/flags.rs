//! Cached node properties.
//!
//! `NodeFlags` are computed once when a green node is built and never
//! recomputed, so "does this subtree have diagnostics" is O(1).

use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct NodeFlags: u8 {
        /// The node or a descendant carries diagnostics.
        const CONTAINS_DIAGNOSTICS = 1 << 0;
        /// The node or a descendant has leading or trailing trivia.
        const CONTAINS_TRIVIA = 1 << 1;
        /// A composite slot below this node is empty.
        const IS_MISSING = 1 << 2;
        /// Diagnostic-free token: safe to share through the token cache.
        const IS_CACHEABLE = 1 << 3;
    }
}

impl NodeFlags {
    /// Flags a parent inherits from a child.
    #[inline]
    #[must_use]
    pub fn propagated(self) -> NodeFlags {
        self & (NodeFlags::CONTAINS_DIAGNOSTICS | NodeFlags::CONTAINS_TRIVIA | NodeFlags::IS_MISSING)
    }
}
