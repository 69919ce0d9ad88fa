use std::collections::BTreeMap;

use crate::edge::Edge;
use crate::types::{NodeId, Symbol};

/// A vertex of the suffix tree.
///
/// Outgoing edges are keyed by the first symbol of their label, so a node has
/// at most one edge per starting symbol. The suffix link is a non-owning
/// handle used to reposition the active point during construction.
#[derive(Clone, Debug)]
pub struct TreeNode<S> {
    pub(crate) id: NodeId,
    pub(crate) edges: BTreeMap<S, Edge>,
    pub(crate) suffix_link: Option<NodeId>,
    pub(crate) string_depth: usize,
    pub(crate) suffix_start: Option<usize>,
}

impl<S: Symbol> TreeNode<S> {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            edges: BTreeMap::new(),
            suffix_link: None,
            string_depth: 0,
            suffix_start: None,
        }
    }

    /// Insert `edge`, replacing any edge that starts with the same symbol.
    pub fn add_edge(&mut self, edge: Edge, text: &[S]) {
        self.edges.insert(text[edge.start()], edge);
    }

    pub fn get_edge(&self, symbol: S) -> Option<&Edge> {
        self.edges.get(&symbol)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Outgoing edges in symbol order.
    pub fn edges(&self) -> impl Iterator<Item = (&S, &Edge)> + '_ {
        self.edges.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn suffix_link(&self) -> Option<NodeId> {
        self.suffix_link
    }

    /// Length of the path label from the root to this node.
    pub fn string_depth(&self) -> usize {
        self.string_depth
    }

    /// Text offset of the suffix spelled by this leaf. `None` for the root and
    /// internal nodes.
    pub fn suffix_start(&self) -> Option<usize> {
        self.suffix_start
    }
}
