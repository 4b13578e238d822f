use super::GreenNode;
use crate::{NodeFlags, SyntaxKind};

/// An interior node with a fixed number of slots, any of which may be
/// missing.
#[derive(Clone, Debug, PartialEq)]
pub struct GreenComposite {
    kind: SyntaxKind,
    slots: Box<[Option<GreenNode>]>,
    full_width: u32,
    flags: NodeFlags,
}

impl GreenComposite {
    pub fn new(kind: SyntaxKind, slots: impl IntoIterator<Item = Option<GreenNode>>) -> Self {
        assert!(kind.is_node(), "{kind} is not a composite node kind");
        let slots: Box<[Option<GreenNode>]> = slots.into_iter().collect();
        let mut full_width = 0;
        let mut flags = NodeFlags::empty();
        for slot in &*slots {
            match slot {
                Some(child) => {
                    full_width += child.full_width();
                    flags |= child.flags().propagated();
                }
                None => flags |= NodeFlags::IS_MISSING,
            }
        }
        GreenComposite {
            kind,
            slots,
            full_width,
            flags,
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn slots(&self) -> &[Option<GreenNode>] {
        &self.slots
    }

    #[inline]
    pub fn full_width(&self) -> u32 {
        self.full_width
    }

    #[inline]
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }
}

/// A sequence of nodes: trivia runs, or repeated elements.
#[derive(Clone, Debug, PartialEq)]
pub struct GreenList {
    children: Box<[GreenNode]>,
    full_width: u32,
    flags: NodeFlags,
}

impl GreenList {
    pub fn new(children: impl IntoIterator<Item = GreenNode>) -> Self {
        let children: Box<[GreenNode]> = children.into_iter().collect();
        let full_width = children.iter().map(GreenNode::full_width).sum();
        let flags = children
            .iter()
            .fold(NodeFlags::empty(), |acc, c| acc | c.flags().propagated());
        GreenList {
            children,
            full_width,
            flags,
        }
    }

    pub fn children(&self) -> &[GreenNode] {
        &self.children
    }

    #[inline]
    pub fn full_width(&self) -> u32 {
        self.full_width
    }

    #[inline]
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }
}
