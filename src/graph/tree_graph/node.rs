use std::collections::BTreeMap;
use std::fmt;

use crate::graph::indexing::{DefaultIx, EdgeIndex, IndexType, NodeIndex};

/// Which input sequence a leaf was created for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Origin {
    A,
    B,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Origin::A => write!(f, "A"),
            Origin::B => write!(f, "B"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NodeKind {
    Root,
    Internal,
    Leaf(Origin),
}

/// A node of the suffix tree. Leaves keep an empty transition map and never get a suffix link.
///
/// `length` is the string depth: the number of tokens spelled from the root down to this node.
/// It is not tracked for leaves, whose depth grows with every phase.
#[derive(Clone, Debug)]
pub struct Node<T, Ix = DefaultIx> {
    kind: NodeKind,
    transitions: BTreeMap<T, EdgeIndex<Ix>>,
    failure: Option<NodeIndex<Ix>>,
    length: usize,
    has_a_leaves: bool,
    has_b_leaves: bool,
    already_counted: bool,
}

impl<T, Ix> Node<T, Ix>
where
    T: Copy + Ord,
    Ix: IndexType,
{
    pub fn new_root() -> Self {
        Self::with_kind(NodeKind::Root, 0)
    }

    pub fn new_internal(length: usize) -> Self {
        Self::with_kind(NodeKind::Internal, length)
    }

    pub fn new_leaf(origin: Origin) -> Self {
        let mut node = Self::with_kind(NodeKind::Leaf(origin), 0);
        node.has_a_leaves = origin == Origin::A;
        node.has_b_leaves = origin == Origin::B;
        node
    }

    fn with_kind(kind: NodeKind, length: usize) -> Self {
        Self {
            kind,
            transitions: BTreeMap::new(),
            failure: None,
            length,
            has_a_leaves: false,
            has_b_leaves: false,
            already_counted: false,
        }
    }

    pub fn get_kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn get_length(&self) -> usize {
        self.length
    }

    pub fn get_failure(&self) -> Option<NodeIndex<Ix>> {
        self.failure
    }

    pub fn set_failure(&mut self, failure: NodeIndex<Ix>) {
        assert!(!self.is_leaf(), "Leaves do not carry suffix links");
        assert!(
            self.failure.is_none() || self.failure == Some(failure),
            "Suffix link is already set to another node"
        );
        self.failure = Some(failure);
    }

    pub fn get_edge(&self, token: T) -> Option<EdgeIndex<Ix>> {
        self.transitions.get(&token).copied()
    }

    pub fn n_edges(&self) -> usize {
        self.transitions.len()
    }

    /// Edges in increasing order of their leading token.
    pub fn edges(&self) -> impl Iterator<Item = (T, EdgeIndex<Ix>)> + '_ {
        self.transitions.iter().map(|(token, edge)| (*token, *edge))
    }

    pub(crate) fn insert_edge(&mut self, token: T, edge: EdgeIndex<Ix>) {
        assert!(!self.is_leaf(), "Cannot add an edge below a leaf");
        let old = self.transitions.insert(token, edge);
        assert!(old.is_none(), "Node already has an edge for this token");
    }

    pub fn has_a_leaves(&self) -> bool {
        self.has_a_leaves
    }

    pub fn has_b_leaves(&self) -> bool {
        self.has_b_leaves
    }

    // Flags only ever turn on.
    pub(crate) fn absorb_leaves(&mut self, has_a_leaves: bool, has_b_leaves: bool) {
        self.has_a_leaves = self.has_a_leaves || has_a_leaves;
        self.has_b_leaves = self.has_b_leaves || has_b_leaves;
    }

    pub fn is_counted(&self) -> bool {
        self.already_counted
    }

    pub(crate) fn mark_counted(&mut self) {
        self.already_counted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestNode = Node<char, u32>;

    #[test]
    fn test_leaf_flags() {
        let a = TestNode::new_leaf(Origin::A);
        assert!(a.is_leaf());
        assert!(a.has_a_leaves());
        assert!(!a.has_b_leaves());

        let b = TestNode::new_leaf(Origin::B);
        assert_eq!(b.get_kind(), NodeKind::Leaf(Origin::B));
        assert!(!b.has_a_leaves());
        assert!(b.has_b_leaves());
    }

    #[test]
    fn test_absorb_is_monotonic() {
        let mut node = TestNode::new_internal(3);
        node.absorb_leaves(true, false);
        node.absorb_leaves(false, false);
        assert!(node.has_a_leaves());
        assert!(!node.has_b_leaves());
        node.absorb_leaves(false, true);
        assert!(node.has_a_leaves());
        assert!(node.has_b_leaves());
    }

    #[test]
    fn test_insert_edge() {
        let mut node = TestNode::new_root();
        node.insert_edge('b', EdgeIndex::new(1));
        node.insert_edge('a', EdgeIndex::new(0));
        assert_eq!(node.n_edges(), 2);
        assert_eq!(node.get_edge('a'), Some(EdgeIndex::new(0)));
        assert_eq!(node.get_edge('c'), None);
        let tokens: Vec<char> = node.edges().map(|(token, _)| token).collect();
        assert_eq!(tokens, vec!['a', 'b']);
    }

    #[test]
    #[should_panic(expected = "already has an edge")]
    fn test_insert_duplicate_edge() {
        let mut node = TestNode::new_root();
        node.insert_edge('a', EdgeIndex::new(0));
        node.insert_edge('a', EdgeIndex::new(1));
    }

    #[test]
    #[should_panic(expected = "below a leaf")]
    fn test_leaf_has_no_edges() {
        let mut node = TestNode::new_leaf(Origin::A);
        node.insert_edge('a', EdgeIndex::new(0));
    }

    #[test]
    fn test_set_failure_same_target_twice() {
        let mut node = TestNode::new_internal(2);
        node.set_failure(NodeIndex::new(1));
        node.set_failure(NodeIndex::new(1));
        assert_eq!(node.get_failure(), Some(NodeIndex::new(1)));
    }

    #[test]
    #[should_panic(expected = "already set to another node")]
    fn test_set_failure_conflict() {
        let mut node = TestNode::new_internal(2);
        node.set_failure(NodeIndex::new(1));
        node.set_failure(NodeIndex::new(2));
    }
}
