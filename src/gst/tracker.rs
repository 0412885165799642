// Watches the nodes touched during construction for the first time their subtree holds leaves
// from both sequences. The deepest such node spells the longest common substring.

use std::fmt::Debug;

use crate::graph::indexing::{IndexType, NodeIndex};
use crate::graph::tree_graph::TreeGraph;

#[derive(Clone, Debug, Default)]
pub struct CommonSubstringTracker {
    boundary: usize,
    max_length: usize,
}

impl CommonSubstringTracker {
    pub fn new(boundary: usize) -> Self {
        Self {
            boundary,
            max_length: 0,
        }
    }

    pub fn get_max_length(&self) -> usize {
        self.max_length
    }

    /// Called with every `stem` that received a new leaf in phase `position`.
    pub fn touch<T, Ix>(
        &mut self,
        graph: &mut TreeGraph<T, Ix>,
        stem: NodeIndex<Ix>,
        position: usize,
    ) where
        T: Copy + Ord + Debug,
        Ix: IndexType,
    {
        // Nothing can span both sequences before B starts.
        if position <= self.boundary {
            return;
        }
        let node = graph.get_node_mut(stem);
        if node.is_counted() || !node.has_a_leaves() || !node.has_b_leaves() {
            return;
        }
        node.mark_counted();
        let length = node.get_length();
        if length > self.max_length {
            log::trace!("common substring of length {} at {:?}", length, stem);
            self.max_length = length;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tree_graph::{Edge, Origin};

    type Graph = TreeGraph<char, u32>;

    fn mixed_node(graph: &mut Graph, length: usize, start: usize) -> NodeIndex<u32> {
        let q = graph.add_internal(length);
        let leaf_a = graph.add_leaf(Origin::A);
        graph.add_edge(q, 'a', Edge::new(leaf_a, start, None));
        let leaf_b = graph.add_leaf(Origin::B);
        graph.add_edge(q, 'b', Edge::new(leaf_b, start + 1, None));
        q
    }

    #[test]
    fn test_ignores_phases_before_b() {
        let mut graph = Graph::new();
        let q = mixed_node(&mut graph, 3, 0);
        let mut tracker = CommonSubstringTracker::new(4);
        tracker.touch(&mut graph, q, 4);
        assert_eq!(tracker.get_max_length(), 0);
        assert!(!graph.get_node(q).is_counted());
        tracker.touch(&mut graph, q, 5);
        assert_eq!(tracker.get_max_length(), 3);
        assert!(graph.get_node(q).is_counted());
    }

    #[test]
    fn test_needs_both_origins() {
        let mut graph = Graph::new();
        let q = graph.add_internal(2);
        let leaf = graph.add_leaf(Origin::A);
        graph.add_edge(q, 'a', Edge::new(leaf, 0, None));
        let mut tracker = CommonSubstringTracker::new(0);
        tracker.touch(&mut graph, q, 1);
        assert_eq!(tracker.get_max_length(), 0);
        assert!(!graph.get_node(q).is_counted());
    }

    #[test]
    fn test_keeps_maximum() {
        let mut graph = Graph::new();
        let deep = mixed_node(&mut graph, 4, 0);
        let shallow = mixed_node(&mut graph, 1, 2);
        let mut tracker = CommonSubstringTracker::new(0);
        tracker.touch(&mut graph, deep, 1);
        tracker.touch(&mut graph, shallow, 1);
        assert_eq!(tracker.get_max_length(), 4);
        assert!(graph.get_node(shallow).is_counted());
    }
}
