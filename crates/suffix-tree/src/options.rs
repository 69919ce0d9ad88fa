use serde::{Deserialize, Serialize};

use crate::types::Symbol;

/// Options for [`SuffixTreeBuilder`](crate::SuffixTreeBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixTreeOptions<S> {
    /// Symbol appended to the text. Must not occur in the input. Default is `$`.
    pub terminator: S,
}

impl<S: Symbol> Default for SuffixTreeOptions<S> {
    fn default() -> Self {
        Self {
            terminator: S::DEFAULT_TERMINATOR,
        }
    }
}
