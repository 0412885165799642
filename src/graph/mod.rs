pub mod indexing;
pub mod tree_graph;

pub use indexing::{DefaultIx, EdgeIndex, IndexType, NodeIndex};
pub use tree_graph::TreeGraph;
