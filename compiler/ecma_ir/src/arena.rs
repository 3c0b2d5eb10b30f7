//! Flat storage for the program tree.
//!
//! [`NodeArena`] uses struct-of-arrays layout: `kinds` and `spans` are
//! parallel arrays indexed by [`NodeId`], and every child list lives in one
//! shared `node_lists` buffer addressed by [`NodeRange`].

use crate::{NodeId, NodeKind, NodeRange, Span};

/// Convert a length to `u32`, panicking with context on overflow.
#[inline]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Arena holding every node of one program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeArena {
    /// Node kinds (parallel with `spans`).
    kinds: Vec<NodeKind>,
    /// Source locations; `None` for nodes synthesized by earlier passes.
    spans: Vec<Option<Span>>,
    /// Flattened child lists.
    node_lists: Vec<NodeId>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a source of the given length (~1 node per 8 bytes).
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 8;
        NodeArena {
            kinds: Vec::with_capacity(estimated),
            spans: Vec::with_capacity(estimated),
            node_lists: Vec::with_capacity(estimated / 2),
        }
    }

    /// Allocate a node, returning its ID.
    pub fn alloc(&mut self, kind: NodeKind, span: Option<Span>) -> NodeId {
        let id = NodeId::new(to_u32(self.kinds.len(), "nodes"));
        self.kinds.push(kind);
        self.spans.push(span);
        id
    }

    /// Allocate a child list.
    pub fn alloc_list(&mut self, ids: &[NodeId]) -> NodeRange {
        if ids.is_empty() {
            return NodeRange::EMPTY;
        }
        let start = to_u32(self.node_lists.len(), "node list entries");
        self.node_lists.extend_from_slice(ids);
        NodeRange::new(start, to_u32(ids.len(), "list elements"))
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.kinds[id.index()]
    }

    /// Source location of a node, `None` if it was synthesized.
    #[inline]
    pub fn span(&self, id: NodeId) -> Option<Span> {
        self.spans[id.index()]
    }

    /// Child IDs of a list. May contain `INVALID` entries (array holes).
    pub fn list(&self, range: NodeRange) -> &[NodeId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.node_lists[start..start + range.len()]
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// A complete lowered program: its arena plus the root `Script` node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub arena: NodeArena,
    pub root: NodeId,
}

impl Program {
    pub fn new(arena: NodeArena, root: NodeId) -> Self {
        Program { arena, root }
    }
}
