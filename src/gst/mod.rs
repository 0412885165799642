pub mod active_point;
pub mod sequence;
pub mod token;
mod tracker; // Spots nodes whose subtree spans both sequences.
mod ukkonen; // Algo from "On-line construction of suffix trees"

pub use self::sequence::{CombinedSequence, SequenceBuilder};
pub use self::token::Token;
pub use self::tracker::CommonSubstringTracker;
pub use self::ukkonen::GeneralizedSuffixTree;
