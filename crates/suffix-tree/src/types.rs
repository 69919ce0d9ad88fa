//! Shared handle and alphabet types.
//!
//! Nodes live in a `Vec`-backed arena owned by the tree. Every "pointer"
//! between nodes (edge targets, suffix links) is a [`NodeId`] index into that
//! arena, so the tree has no ownership cycles and drops as a plain vector.

use std::fmt;

use serde::Serialize;

/// Stable handle of a node in the arena.
///
/// Ids are assigned in creation order and are only meaningful for the tree
/// that produced them. The root is always [`NodeId::ROOT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node{}", self.0)
    }
}

/// End of an edge label.
///
/// Leaf edges are created [`EdgeEnd::Open`]: their label implicitly grows with
/// every appended symbol, so leaves never need revisiting during the build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeEnd {
    Closed(usize),
    Open,
}

/// Alphabet of a suffix tree.
///
/// Symbols are compared with `Ord` so that outgoing edges are kept in a
/// deterministic order.
pub trait Symbol: Copy + Ord + fmt::Debug {
    /// Terminator appended when no other is configured.
    const DEFAULT_TERMINATOR: Self;

    /// Append a human-readable rendering of `label` to `out`.
    fn write_label(label: &[Self], out: &mut String);
}

impl Symbol for u8 {
    const DEFAULT_TERMINATOR: Self = b'$';

    /// Valid UTF-8 is copied through. Bytes that do not form a complete
    /// character, such as the halves of a character split across two edges,
    /// are written as `\xNN`.
    fn write_label(label: &[Self], out: &mut String) {
        let mut rest = label;
        while !rest.is_empty() {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    // `valid_up_to` marks the longest UTF-8 prefix.
                    out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    let bad = err.error_len().unwrap_or(after.len());
                    for byte in &after[..bad] {
                        out.push_str(&format!("\\x{byte:02X}"));
                    }
                    rest = &after[bad..];
                }
            }
        }
    }
}

impl Symbol for char {
    const DEFAULT_TERMINATOR: Self = '$';

    fn write_label(label: &[Self], out: &mut String) {
        out.extend(label.iter());
    }
}

/// Render a label slice into a fresh string.
pub fn label_to_string<S: Symbol>(label: &[S]) -> String {
    let mut out = String::new();
    S::write_label(label, &mut out);
    out
}
