use crate::graph::tree_graph::Origin;

/// Errors raised while validating input, before any construction starts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("Sequence {origin} contains reserved sentinel {sentinel} at position {position}")]
    SentinelInSequence {
        origin: Origin,
        position: usize,
        sentinel: String,
    },
    #[error("Sentinels must be distinct, got {0} twice")]
    DuplicateSentinels(String),
    #[error("Combined sequence of length {length} exceeds the maximum of {max_length}")]
    TooLong { length: usize, max_length: usize },
}
