//! Online construction with Ukkonen's algorithm.
//!
//! The text is consumed one symbol per phase. `remainder` counts the suffixes
//! that still lack an explicit leaf; each phase inserts them one extension at
//! a time, starting from the active point, until either all are inserted or
//! the next one is found to be implicitly present already (in which case all
//! shorter ones are too and the phase ends early).
//!
//! Three facts keep the work linear:
//!
//! - Leaf edges are open, so existing leaves grow for free.
//! - After an insertion the active point moves to the next shorter suffix in
//!   O(1): by dropping the first symbol when it sits on the root, or by
//!   following the active node's suffix link otherwise.
//! - Moving down from a node only compares edge lengths (skip/count), never
//!   individual symbols.

use log::{debug, trace};

use crate::active_point::ActivePoint;
use crate::edge::{push_node, Edge};
use crate::error::BuildError;
use crate::options::SuffixTreeOptions;
use crate::tree::SuffixTree;
use crate::tree_node::TreeNode;
use crate::types::{NodeId, Symbol};

/// Upper bound on indexable text: a tree over `n` symbols has at most
/// `2n + 1` nodes and node ids are `u32`.
const MAX_TEXT_LEN: usize = (u32::MAX as usize - 1) / 2;

/// Builds a [`SuffixTree`] over one text.
///
/// `build` consumes the builder, so a tree always indexes exactly one text.
pub struct SuffixTreeBuilder<S: Symbol = u8> {
    options: SuffixTreeOptions<S>,
    nodes: Vec<TreeNode<S>>,
    text: Vec<S>,
    active: ActivePoint,
    remainder: usize,
    /// Internal node of the current phase still waiting for its suffix link.
    pending_link: Option<NodeId>,
}

impl<S: Symbol> SuffixTreeBuilder<S> {
    pub fn new(options: SuffixTreeOptions<S>) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            text: Vec::new(),
            active: ActivePoint::new(NodeId::ROOT),
            remainder: 0,
            pending_link: None,
        }
    }

    pub fn options(&self) -> &SuffixTreeOptions<S> {
        &self.options
    }

    /// Build the suffix tree of `input` followed by the configured terminator.
    ///
    /// # Errors
    ///
    /// - [`BuildError::TerminatorCollision`] if the terminator occurs in `input`.
    /// - [`BuildError::TextTooLong`] if `input` cannot be indexed by `u32` node ids.
    ///
    /// # Example
    ///
    /// ```
    /// use suffix_tree::{SuffixTreeBuilder, SuffixTreeOptions};
    ///
    /// let tree = SuffixTreeBuilder::new(SuffixTreeOptions { terminator: b'#' })
    ///     .build(b"banana")
    ///     .unwrap();
    /// assert_eq!(tree.leaf_count(), 7);
    /// assert_eq!(tree.text(), b"banana#");
    /// ```
    pub fn build(mut self, input: &[S]) -> Result<SuffixTree<S>, BuildError> {
        let terminator = self.options.terminator;
        if let Some(position) = input.iter().position(|&s| s == terminator) {
            return Err(BuildError::TerminatorCollision { position });
        }
        if input.len() >= MAX_TEXT_LEN {
            return Err(BuildError::TextTooLong { len: input.len() });
        }

        self.text = Vec::with_capacity(input.len() + 1);
        self.text.extend_from_slice(input);
        self.text.push(terminator);

        self.nodes = Vec::with_capacity(2 * self.text.len() + 1);
        push_node(&mut self.nodes);
        self.active = ActivePoint::new(NodeId::ROOT);
        self.remainder = 0;
        self.pending_link = None;

        debug!("building suffix tree over {} symbols", self.text.len());
        for pos in 0..self.text.len() {
            self.extend(pos);
        }
        debug_assert_eq!(self.remainder, 0);

        let tree = SuffixTree::from_parts(self.nodes, self.text, terminator);
        debug!(
            "built suffix tree: {} nodes, {} leaves",
            tree.node_count(),
            tree.leaf_count()
        );
        Ok(tree)
    }

    /// One phase: make every suffix ending at `pos` present in the tree.
    fn extend(&mut self, pos: usize) {
        let symbol = self.text[pos];
        self.remainder += 1;
        self.pending_link = None;
        trace!("phase {pos}: {:?}, remainder {}", self.active, self.remainder);

        while self.remainder > 0 {
            if self.active.length == 0 {
                self.active.edge_start = Some(pos);
            }

            match self.active.edge(&self.nodes, &self.text).copied() {
                None => {
                    let node = self.active.node;
                    let leaf = push_node(&mut self.nodes);
                    self.nodes[node.index()].add_edge(Edge::open(pos, leaf), &self.text);
                    self.link_pending(node);
                }
                Some(mut edge) => {
                    if self.active.walk_down(&edge, pos) {
                        continue;
                    }
                    if self.text[edge.start() + self.active.length] == symbol {
                        // Already present, and so is every shorter pending suffix.
                        self.active.length += 1;
                        self.link_pending(self.active.node);
                        return;
                    }
                    let node = self.active.node;
                    let internal =
                        edge.split(self.active.length, pos, pos, &mut self.nodes, &self.text);
                    self.nodes[node.index()].add_edge(edge, &self.text);
                    self.link_pending(internal);
                }
            }

            self.remainder -= 1;
            if self.active.node.is_root() && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge_start = Some(pos + 1 - self.remainder);
            } else {
                self.active.node = self.follow_suffix_link(self.active.node);
            }
        }
    }

    /// Point the pending node's suffix link at `node` and make `node` the next
    /// pending one. The root is never pending.
    fn link_pending(&mut self, node: NodeId) {
        if let Some(pending) = self.pending_link.take() {
            self.nodes[pending.index()].suffix_link = Some(node);
        }
        if !node.is_root() {
            self.pending_link = Some(node);
        }
    }

    fn follow_suffix_link(&self, node: NodeId) -> NodeId {
        match self.nodes[node.index()].suffix_link {
            Some(link) => link,
            None if node.is_root() => NodeId::ROOT,
            None => panic!("suffix link of internal {node} was never assigned"),
        }
    }
}

impl<S: Symbol> Default for SuffixTreeBuilder<S> {
    fn default() -> Self {
        Self::new(SuffixTreeOptions::default())
    }
}
