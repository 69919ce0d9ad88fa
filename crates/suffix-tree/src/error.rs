use thiserror::Error;

/// Input rejected by [`SuffixTreeBuilder::build`](crate::SuffixTreeBuilder::build).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The terminator symbol already occurs in the input, so suffixes would no
    /// longer end at distinct leaves.
    #[error("terminator symbol occurs in the input at position {position}")]
    TerminatorCollision { position: usize },
    #[error("text of {len} symbols is too long to index")]
    TextTooLong { len: usize },
}
