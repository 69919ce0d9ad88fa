#![allow(dead_code)]

use std::collections::HashMap;

use suffix_tree::{NodeId, SuffixTree, Symbol};

/// Walk `path` from the root. Returns the node reached if the walk ends
/// exactly on a node.
pub fn walk_to_node<S: Symbol>(tree: &SuffixTree<S>, path: &[S]) -> Option<NodeId> {
    let mut node = tree.root();
    let mut i = 0;
    while i < path.len() {
        let edge = tree.node(node).get_edge(path[i])?;
        for &s in tree.edge_label(edge) {
            if i == path.len() {
                return None;
            }
            if s != path[i] {
                return None;
            }
            i += 1;
        }
        node = edge.target();
    }
    Some(node)
}

/// Substring test by walking down from the root.
pub fn contains<S: Symbol>(tree: &SuffixTree<S>, pattern: &[S]) -> bool {
    let mut node = tree.root();
    let mut i = 0;
    while i < pattern.len() {
        let Some(edge) = tree.node(node).get_edge(pattern[i]) else {
            return false;
        };
        for &s in tree.edge_label(edge) {
            if i == pattern.len() {
                return true;
            }
            if s != pattern[i] {
                return false;
            }
            i += 1;
        }
        node = edge.target();
    }
    true
}

/// Path label of every node.
pub fn path_labels<S: Symbol>(tree: &SuffixTree<S>) -> HashMap<NodeId, Vec<S>> {
    let mut labels = HashMap::new();
    let mut stack = vec![(tree.root(), Vec::new())];
    while let Some((id, label)) = stack.pop() {
        for edge in tree.edges(id) {
            let mut child = label.clone();
            child.extend_from_slice(tree.edge_label(edge));
            stack.push((edge.target(), child));
        }
        labels.insert(id, label);
    }
    labels
}

pub fn internal_nodes<S: Symbol>(tree: &SuffixTree<S>) -> Vec<NodeId> {
    tree.nodes()
        .filter(|n| !n.is_leaf() && !n.id().is_root())
        .map(|n| n.id())
        .collect()
}

/// Check every structural property of a complete suffix tree over `input`.
pub fn assert_well_formed<S: Symbol>(tree: &SuffixTree<S>, input: &[S]) {
    let text = tree.text();
    assert_eq!(tree.input(), input);
    assert_eq!(text.len(), input.len() + 1);
    assert_eq!(tree.leaf_count(), input.len() + 1, "leaf count for {input:?}");

    for id in internal_nodes(tree) {
        assert!(
            tree.node(id).edge_count() >= 2,
            "unary internal node {id} for {input:?}"
        );
    }

    for i in 0..text.len() {
        let leaf = walk_to_node(tree, &text[i..])
            .unwrap_or_else(|| panic!("suffix {i} of {input:?} is not spelled by the tree"));
        assert!(tree.is_leaf(leaf), "suffix {i} of {input:?} ends at internal {leaf}");
        assert_eq!(tree.node(leaf).suffix_start(), Some(i));
    }

    let labels = path_labels(tree);
    for node in tree.nodes() {
        assert_eq!(node.string_depth(), labels[&node.id()].len());
    }

    assert_eq!(tree.suffix_link(tree.root()), None);
    for id in internal_nodes(tree) {
        let link = tree
            .suffix_link(id)
            .unwrap_or_else(|| panic!("internal {id} of {input:?} has no suffix link"));
        assert_eq!(
            &labels[&id][1..],
            labels[&link].as_slice(),
            "suffix link {id} -> {link} for {input:?}"
        );
    }
}
