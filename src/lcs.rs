// Public entry points: length of the longest common substring of two sequences.

use crate::error::InvalidInputError;
use crate::graph::indexing::DefaultIx;
use crate::gst::{GeneralizedSuffixTree, SequenceBuilder, Token};

/// Length of the longest substring shared by `a` and `b`, using the default sentinels of `T`.
///
/// # Examples
///
/// ```
/// use rusty_gst::longest_common_substring_length;
/// let a: Vec<char> = "ABAB".chars().collect();
/// let b: Vec<char> = "BABA".chars().collect();
/// assert_eq!(longest_common_substring_length(&a, &b).unwrap(), 3);
/// ```
pub fn longest_common_substring_length<T: Token>(
    a: &[T],
    b: &[T],
) -> Result<usize, InvalidInputError> {
    longest_common_substring_length_with(a, b, T::sentinels())
}

/// Same as `longest_common_substring_length`, with an explicit pair of sentinels.
pub fn longest_common_substring_length_with<T: Token>(
    a: &[T],
    b: &[T],
    sentinels: (T, T),
) -> Result<usize, InvalidInputError> {
    let sequence = SequenceBuilder::new(sentinels).build(a, b)?;
    let mut tree: GeneralizedSuffixTree<T, DefaultIx> = GeneralizedSuffixTree::new(sequence);
    tree.build();
    Ok(tree.max_common_length())
}

/// Character-level convenience wrapper; `#` and `$` are reserved.
pub fn longest_common_substring_length_str(a: &str, b: &str) -> Result<usize, InvalidInputError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    longest_common_substring_length(&a, &b)
}
