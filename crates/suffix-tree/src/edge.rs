use crate::tree_node::TreeNode;
use crate::types::{EdgeEnd, NodeId, Symbol};

/// A labelled edge: the half-open range `[start, end)` of the shared text,
/// leading to `target`.
///
/// Every non-root node has exactly one incoming edge, so the edge stands for
/// ownership of its target even though the node itself is stored in the
/// arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    start: usize,
    end: EdgeEnd,
    target: NodeId,
}

impl Edge {
    /// Leaf edge whose label grows with the text.
    pub fn open(start: usize, target: NodeId) -> Self {
        Self {
            start,
            end: EdgeEnd::Open,
            target,
        }
    }

    pub fn closed(start: usize, end: usize, target: NodeId) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end: EdgeEnd::Closed(end),
            target,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> EdgeEnd {
        self.end
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn is_open(&self) -> bool {
        self.end == EdgeEnd::Open
    }

    /// Label length while the symbol at `current_end` is being added.
    ///
    /// An open edge covers everything up to and including `current_end`.
    pub fn length(&self, current_end: usize) -> usize {
        match self.end {
            EdgeEnd::Closed(end) => end - self.start,
            EdgeEnd::Open => current_end + 1 - self.start,
        }
    }

    /// Exclusive end offset once the text is complete.
    pub fn end_offset(&self, text_len: usize) -> usize {
        match self.end {
            EdgeEnd::Closed(end) => end,
            EdgeEnd::Open => text_len,
        }
    }

    /// Split this edge `split_offset` symbols after its start.
    ///
    /// The edge is shortened and redirected to a new internal node. The
    /// internal node receives the rest of the old label (keeping its end, so
    /// an open leaf edge stays open) towards the old target, and an open edge
    /// at `new_leaf_start` towards a new leaf. Returns the internal node.
    ///
    /// The caller stores the shortened edge back into its parent.
    pub(crate) fn split<S: Symbol>(
        &mut self,
        split_offset: usize,
        new_leaf_start: usize,
        current_end: usize,
        nodes: &mut Vec<TreeNode<S>>,
        text: &[S],
    ) -> NodeId {
        let length = self.length(current_end);
        assert!(
            split_offset > 0 && split_offset < length,
            "cannot split edge of length {length} at offset {split_offset}"
        );

        let mid = self.start + split_offset;
        let rest = Edge {
            start: mid,
            end: self.end,
            target: self.target,
        };

        let internal = push_node(nodes);
        let leaf = push_node(nodes);
        let node = &mut nodes[internal.index()];
        node.add_edge(rest, text);
        node.add_edge(Edge::open(new_leaf_start, leaf), text);

        self.end = EdgeEnd::Closed(mid);
        self.target = internal;
        internal
    }
}

/// Allocate a fresh node at the end of the arena.
pub(crate) fn push_node<S: Symbol>(nodes: &mut Vec<TreeNode<S>>) -> NodeId {
    let id = NodeId(nodes.len() as u32);
    nodes.push(TreeNode::new(id));
    id
}
