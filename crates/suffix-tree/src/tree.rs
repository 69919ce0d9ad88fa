use serde::Serialize;

use crate::builder::SuffixTreeBuilder;
use crate::edge::Edge;
use crate::error::BuildError;
use crate::options::SuffixTreeOptions;
use crate::print::{print_tree, PrintChild, Printable};
use crate::tree_node::TreeNode;
use crate::types::{label_to_string, NodeId, Symbol};

/// A finished suffix tree over one text.
///
/// The tree is read-only. Nodes are addressed by [`NodeId`]; edges are read
/// through [`SuffixTree::edges`] and their labels resolved against
/// [`SuffixTree::text`].
#[derive(Clone, Debug)]
pub struct SuffixTree<S: Symbol = u8> {
    nodes: Vec<TreeNode<S>>,
    text: Vec<S>,
    terminator: S,
}

/// Shape summary of a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Input length, not counting the terminator.
    pub text_len: usize,
    pub node_count: usize,
    pub internal_count: usize,
    pub leaf_count: usize,
    pub suffix_link_count: usize,
    /// Longest path label of an internal node (the longest repeat).
    pub max_internal_depth: usize,
}

impl<S: Symbol> SuffixTree<S> {
    /// Build the tree of `text` with the default terminator.
    pub fn build(text: &[S]) -> Result<Self, BuildError> {
        SuffixTreeBuilder::new(SuffixTreeOptions::default()).build(text)
    }

    pub(crate) fn from_parts(nodes: Vec<TreeNode<S>>, text: Vec<S>, terminator: S) -> Self {
        let mut tree = Self {
            nodes,
            text,
            terminator,
        };
        tree.annotate();
        tree
    }

    /// Fill in string depths, and suffix offsets of leaves.
    fn annotate(&mut self) {
        let text_len = self.text.len();
        let mut stack = vec![(NodeId::ROOT, 0)];
        while let Some((id, depth)) = stack.pop() {
            let node = &mut self.nodes[id.index()];
            node.string_depth = depth;
            if node.is_leaf() && !id.is_root() {
                node.suffix_start = Some(text_len - depth);
            }
            for edge in node.edges.values() {
                let length = edge.end_offset(text_len) - edge.start();
                stack.push((edge.target(), depth + length));
            }
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> &TreeNode<S> {
        &self.nodes[id.index()]
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode<S>> + '_ {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.is_leaf() && !n.id().is_root())
            .count()
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).is_leaf()
    }

    /// Outgoing edges of `id` in symbol order.
    pub fn edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.node(id).edges.values()
    }

    pub fn edge_label(&self, edge: &Edge) -> &[S] {
        &self.text[edge.start()..edge.end_offset(self.text.len())]
    }

    pub fn suffix_link(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).suffix_link()
    }

    /// Indexed text including the terminator.
    pub fn text(&self) -> &[S] {
        &self.text
    }

    /// Indexed text without the terminator.
    pub fn input(&self) -> &[S] {
        &self.text[..self.text.len() - 1]
    }

    pub fn terminator(&self) -> S {
        self.terminator
    }

    /// Pre-order traversal from the root, children in symbol order.
    pub fn depth_first(&self) -> DepthFirst<'_, S> {
        DepthFirst {
            tree: self,
            stack: vec![NodeId::ROOT],
        }
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            text_len: self.text.len() - 1,
            node_count: self.nodes.len(),
            ..TreeStats::default()
        };
        for node in &self.nodes {
            if node.suffix_link.is_some() {
                stats.suffix_link_count += 1;
            }
            if node.id.is_root() {
                continue;
            }
            if node.is_leaf() {
                stats.leaf_count += 1;
            } else {
                stats.internal_count += 1;
                stats.max_internal_depth = stats.max_internal_depth.max(node.string_depth);
            }
        }
        stats
    }

    fn print_node(&self, id: NodeId, tab: &str) -> String {
        let children: Vec<Box<PrintChild<'_>>> = self
            .edges(id)
            .map(|edge| {
                let edge = *edge;
                Box::new(move |tab: &str| self.print_edge(&edge, tab)) as Box<PrintChild<'_>>
            })
            .collect();
        let children: Vec<&PrintChild<'_>> = children.iter().map(|c| c.as_ref()).collect();
        print_tree(Some(tab), &children)
    }

    fn print_edge(&self, edge: &Edge, tab: &str) -> String {
        let target = edge.target();
        let node = self.node(target);
        let mut line = format!("{:?} → {target}", label_to_string(self.edge_label(edge)));
        if let Some(start) = node.suffix_start() {
            line.push_str(&format!(" [{start}]"));
        }
        if let Some(link) = node.suffix_link() {
            line.push_str(&format!(" ~> {link}"));
        }
        line.push_str(&self.print_node(target, tab));
        line
    }
}

impl<S: Symbol> Printable for SuffixTree<S> {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        format!(
            "SuffixTree {:?}{}",
            label_to_string(&self.text),
            self.print_node(NodeId::ROOT, tab.unwrap_or(""))
        )
    }
}

/// Iterator returned by [`SuffixTree::depth_first`].
pub struct DepthFirst<'a, S: Symbol> {
    tree: &'a SuffixTree<S>,
    stack: Vec<NodeId>,
}

impl<'a, S: Symbol> Iterator for DepthFirst<'a, S> {
    type Item = &'a TreeNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack
            .extend(node.edges.values().rev().map(|edge| edge.target()));
        Some(node)
    }
}
