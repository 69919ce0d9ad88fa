//! Read-only snapshot of a tree as vertex and edge lists.

use log::debug;
use serde::Serialize;
use suffix_tree::{label_to_string, NodeId, SuffixTree, Symbol};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexKind {
    Root,
    Internal,
    Leaf,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Vertex {
    pub id: NodeId,
    pub kind: VertexKind,
    /// Target of the suffix link. Links to the root are left out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix_link: Option<NodeId>,
    /// Offset of the suffix spelled by a leaf.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix_start: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabelledEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub label: String,
}

/// Vertices in pre-order from the root, edges grouped by source in the same
/// order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
    pub text: String,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<LabelledEdge>,
}

impl GraphDescription {
    pub fn root(&self) -> &Vertex {
        &self.vertices[0]
    }

    pub fn suffix_links(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.vertices
            .iter()
            .filter_map(|v| v.suffix_link.map(|link| (v.id, link)))
    }
}

/// Snapshot `tree` for rendering.
pub fn describe<S: Symbol>(tree: &SuffixTree<S>) -> GraphDescription {
    let mut vertices = Vec::with_capacity(tree.node_count());
    let mut edges = Vec::with_capacity(tree.node_count().saturating_sub(1));

    for node in tree.depth_first() {
        let id = node.id();
        let kind = if id.is_root() {
            VertexKind::Root
        } else if node.is_leaf() {
            VertexKind::Leaf
        } else {
            VertexKind::Internal
        };
        vertices.push(Vertex {
            id,
            kind,
            suffix_link: node.suffix_link().filter(|link| !link.is_root()),
            suffix_start: node.suffix_start(),
        });
        edges.extend(tree.edges(id).map(|edge| LabelledEdge {
            from: id,
            to: edge.target(),
            label: label_to_string(tree.edge_label(edge)),
        }));
    }

    debug!(
        "described suffix tree: {} vertices, {} edges",
        vertices.len(),
        edges.len()
    );
    GraphDescription {
        text: label_to_string(tree.text()),
        vertices,
        edges,
    }
}
