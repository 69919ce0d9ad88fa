//! Graph export for [`suffix_tree`].
//!
//! The exporter only reads a finished tree: it snapshots vertices, labelled
//! edges and suffix links into a [`GraphDescription`], which can then be
//! rendered as Graphviz DOT or serialized as JSON.
//!
//! # Example
//!
//! ```
//! use suffix_tree::SuffixTree;
//! use suffix_tree_dot::to_dot;
//!
//! let tree: SuffixTree = SuffixTree::build(b"abcabxabcd").unwrap();
//! let dot = to_dot(&tree);
//! assert!(dot.starts_with("digraph {"));
//! assert!(dot.contains("style=dotted"));
//! ```

pub mod cli;
pub mod dot;
pub mod graph;

pub use dot::{render_dot, write_dot};
pub use graph::{describe, GraphDescription, LabelledEdge, Vertex, VertexKind};

use suffix_tree::{SuffixTree, Symbol};

/// Render `tree` as Graphviz DOT.
pub fn to_dot<S: Symbol>(tree: &SuffixTree<S>) -> String {
    render_dot(&describe(tree))
}

pub fn to_json(desc: &GraphDescription) -> serde_json::Result<String> {
    serde_json::to_string_pretty(desc)
}
