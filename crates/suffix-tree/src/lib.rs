//! Suffix trees built online with Ukkonen's algorithm.
//!
//! A suffix tree indexes every suffix of a text; any substring can then be
//! located by walking down from the root in time proportional to its length.
//! Construction here is amortized linear in the text length.
//!
//! Nodes are stored in a `Vec`-backed arena and refer to each other through
//! [`NodeId`] handles, so suffix links are plain indices rather than
//! back-pointers.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`NodeId`], [`EdgeEnd`], the [`Symbol`] alphabet trait |
//! [`tree_node`] | [`TreeNode`]: outgoing edges and suffix link |
//! [`edge`] | [`Edge`]: label range, length, split |
//! [`active_point`] | [`ActivePoint`] cursor and the skip/count walk |
//! [`builder`] | [`SuffixTreeBuilder`]: the phase/extension loop |
//! [`tree`] | [`SuffixTree`]: read-only accessors of a finished tree |
//! [`print`] | Box-drawing text dump |
//!
//! # Example
//!
//! ```
//! use suffix_tree::{Printable, SuffixTree};
//!
//! let tree: SuffixTree = SuffixTree::build(b"banana").unwrap();
//! assert_eq!(tree.leaf_count(), 7);
//! assert!(tree.to_string_with_tab(None).starts_with("SuffixTree \"banana$\""));
//! ```

pub mod active_point;
pub mod builder;
pub mod edge;
pub mod error;
pub mod options;
pub mod print;
pub mod tree;
pub mod tree_node;
pub mod types;

pub use active_point::ActivePoint;
pub use builder::SuffixTreeBuilder;
pub use edge::Edge;
pub use error::BuildError;
pub use options::SuffixTreeOptions;
pub use print::Printable;
pub use tree::{DepthFirst, SuffixTree, TreeStats};
pub use tree_node::TreeNode;
pub use types::{label_to_string, EdgeEnd, NodeId, Symbol};
