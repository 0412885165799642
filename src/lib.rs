//! Length of the longest common substring of two sequences, read off a generalized suffix tree
//! built on-line with Ukkonen's algorithm.

pub mod build_stats;
pub mod error;
pub mod graph;
pub mod gst;
pub mod lcs;
pub mod tokenize;

pub use error::InvalidInputError;
pub use gst::{GeneralizedSuffixTree, SequenceBuilder, Token};
pub use lcs::{
    longest_common_substring_length, longest_common_substring_length_str,
    longest_common_substring_length_with,
};
