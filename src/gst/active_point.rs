// The position in the tree where the next extension is applied.
//
// The point is (node, token, idx): `idx` tokens along the edge leaving `node` that starts with
// `token`. With idx == 0 there is no active edge and the point sits exactly at `node`.
// An active point is kept canonical: idx is always strictly less than the active edge's length.

use std::fmt::Debug;

use crate::graph::indexing::{DefaultIx, EdgeIndex, IndexType, NodeIndex};
use crate::graph::tree_graph::{NodeKind, TreeGraph};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ActivePoint<T, Ix = DefaultIx> {
    pub node: NodeIndex<Ix>,
    pub token: Option<T>,
    pub idx: usize,
    /// Suffixes ending at the current phase that are not yet explicit leaves, minus one.
    pub pending: isize,
}

impl<T, Ix> ActivePoint<T, Ix>
where
    T: Copy + Ord + Debug,
    Ix: IndexType,
{
    pub fn new(root: NodeIndex<Ix>) -> Self {
        Self {
            node: root,
            token: None,
            idx: 0,
            pending: -1,
        }
    }

    /// The edge the point lies on. Panics if there is none, which means the tree is corrupt.
    pub fn active_edge(&self, graph: &TreeGraph<T, Ix>) -> EdgeIndex<Ix> {
        let token = self.token.expect("Active point has an offset but no active edge");
        graph
            .get_edge_by_token(self.node, token)
            .expect("Active edge is missing from the active node")
    }

    /// Whether the path through the active point continues with `token`.
    pub fn is_followed_by(&self, graph: &TreeGraph<T, Ix>, tokens: &[T], token: T) -> bool {
        if self.idx == 0 {
            return graph.get_edge_by_token(self.node, token).is_some();
        }
        let (start, _) = graph.span(self.active_edge(graph));
        tokens[start + self.idx] == token
    }

    /// Rule 3: `token` is already in the tree, so step over it instead of inserting.
    pub fn advance_on_match(&mut self, graph: &TreeGraph<T, Ix>, token: T) {
        self.idx += 1;
        if self.token.is_none() {
            self.token = Some(token);
        }
        // Never leave the point at the very end of an edge.
        let edge_idx = self.active_edge(graph);
        if self.idx == graph.edge_len(edge_idx) {
            self.node = graph.get_edge(edge_idx).get_target();
            self.token = None;
            self.idx = 0;
        }
    }

    /// Move on to the next shorter pending suffix after a leaf was inserted in phase `position`.
    ///
    /// Only at the root is the first pending token part of (token, idx); everywhere else it is
    /// implied by the node, and following the suffix link drops it. After the jump idx may run
    /// past the active edge, so walk down edge by edge until the point is canonical again.
    pub fn canonicalize_after_insert(
        &mut self,
        graph: &TreeGraph<T, Ix>,
        tokens: &[T],
        position: usize,
    ) {
        self.pending -= 1;
        let root = graph.get_root();
        if self.node == root {
            if self.idx > 1 {
                self.token = Some(tokens[self.suffix_start(position)]);
                self.idx -= 1;
            } else {
                self.token = None;
                self.idx = 0;
            }
        }

        let node = graph.get_node(self.node);
        self.node = match node.get_kind() {
            NodeKind::Root => root,
            _ => node
                .get_failure()
                .expect("Internal node has no suffix link"),
        };

        while self.token.is_some() {
            let edge_idx = self.active_edge(graph);
            let length = graph.edge_len(edge_idx);
            if self.idx < length {
                break;
            }
            self.node = graph.get_edge(edge_idx).get_target();
            if self.idx == length {
                self.token = None;
                self.idx = 0;
            } else {
                self.idx -= length;
                let depth = graph.get_node(self.node).get_length();
                self.token = Some(tokens[self.suffix_start(position) + depth]);
            }
        }
    }

    // Start of the longest pending suffix.
    fn suffix_start(&self, position: usize) -> usize {
        let start = position as isize - self.pending;
        assert!(start >= 0, "Pending suffixes reach before the sequence");
        start as usize
    }
}
