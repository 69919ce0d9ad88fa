use std::fmt;

use crate::edge::Edge;
use crate::tree_node::TreeNode;
use crate::types::{NodeId, Symbol};

/// Cursor of Ukkonen's algorithm: where the next pending suffix is inserted.
///
/// The active edge is not stored. While `length` is 0 there is no active
/// edge at all; otherwise it is the edge of `node` starting with
/// `text[edge_start]`, resolved on demand by [`ActivePoint::edge`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ActivePoint {
    pub node: NodeId,
    pub edge_start: Option<usize>,
    pub length: usize,
}

impl ActivePoint {
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            edge_start: None,
            length: 0,
        }
    }

    /// First symbol of the active edge.
    pub fn edge_symbol<S: Symbol>(&self, text: &[S]) -> Option<S> {
        self.edge_start.map(|pos| text[pos])
    }

    pub fn edge<'a, S: Symbol>(&self, nodes: &'a [TreeNode<S>], text: &[S]) -> Option<&'a Edge> {
        let symbol = self.edge_symbol(text)?;
        nodes[self.node.index()].get_edge(symbol)
    }

    /// Skip/count step: hop over `edge` when the active length covers it.
    ///
    /// Returns `true` when the cursor moved to the edge's target; the caller
    /// must then re-resolve the active edge from the new node.
    pub fn walk_down(&mut self, edge: &Edge, current_end: usize) -> bool {
        let length = edge.length(current_end);
        if self.length < length {
            return false;
        }
        self.edge_start = self.edge_start.map(|pos| pos + length);
        self.length -= length;
        self.node = edge.target();
        true
    }
}

impl fmt::Debug for ActivePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.edge_start {
            Some(pos) => write!(f, "ActivePoint({}, @{}, {})", self.node, pos, self.length),
            None => write!(f, "ActivePoint({}, -, {})", self.node, self.length),
        }
    }
}
