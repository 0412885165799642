// Arena storage for a suffix tree.
//
// Nodes and edges live in two vectors and refer to each other by index. Parent -> child ownership
// is expressed only through edges; suffix links are plain node indices on the node itself, so the
// link graph never participates in ownership. Nothing is ever removed from either arena.

use std::fmt::Debug;

use crate::graph::indexing::{DefaultIx, EdgeIndex, IndexType, NodeIndex};

pub mod edge;
pub mod node;

pub use self::edge::Edge;
pub use self::node::{Node, NodeKind, Origin};

pub struct TreeGraph<T, Ix = DefaultIx> {
    nodes: Vec<Node<T, Ix>>,
    edges: Vec<Edge<Ix>>,
    root: NodeIndex<Ix>,
    // Exclusive end position reached by every open edge.
    e: usize,
}

impl<T, Ix> Default for TreeGraph<T, Ix>
where
    T: Copy + Ord + Debug,
    Ix: IndexType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Ix> TreeGraph<T, Ix>
where
    T: Copy + Ord + Debug,
    Ix: IndexType,
{
    pub fn new() -> Self {
        Self::with_capacity(1, 0)
    }

    pub fn with_capacity(n_nodes: usize, n_edges: usize) -> Self {
        let mut nodes = Vec::with_capacity(n_nodes.max(1));
        nodes.push(Node::new_root());
        Self {
            nodes,
            edges: Vec::with_capacity(n_edges),
            root: NodeIndex::new(0),
            e: 0,
        }
    }

    pub fn get_root(&self) -> NodeIndex<Ix> {
        self.root
    }

    pub fn add_internal(&mut self, length: usize) -> NodeIndex<Ix> {
        self.push_node(Node::new_internal(length))
    }

    pub fn add_leaf(&mut self, origin: Origin) -> NodeIndex<Ix> {
        self.push_node(Node::new_leaf(origin))
    }

    fn push_node(&mut self, node: Node<T, Ix>) -> NodeIndex<Ix> {
        let idx = NodeIndex::new(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// Install `edge` below `state` under its leading `token`, then fold the leaf origins of the
    /// edge's target into `state`.
    pub fn add_edge(&mut self, state: NodeIndex<Ix>, token: T, edge: Edge<Ix>) -> EdgeIndex<Ix> {
        let edge_idx = EdgeIndex::new(self.edges.len());
        let (has_a, has_b) = {
            let target = &self.nodes[edge.get_target().index()];
            (target.has_a_leaves(), target.has_b_leaves())
        };
        self.edges.push(edge);

        let node = &mut self.nodes[state.index()];
        node.insert_edge(token, edge_idx);
        node.absorb_leaves(has_a, has_b);
        edge_idx
    }

    pub fn get_edge_by_token(&self, state: NodeIndex<Ix>, token: T) -> Option<EdgeIndex<Ix>> {
        self.nodes[state.index()].get_edge(token)
    }

    /// Split `edge_idx` (an edge out of `state`) after `offset` tokens. The original edge is cut
    /// short and redirected to a new internal node, which gets a new edge labelled by the
    /// remainder (leading with `tail_token`) toward the original target. Returns the new node.
    pub fn split_edge(
        &mut self,
        state: NodeIndex<Ix>,
        edge_idx: EdgeIndex<Ix>,
        offset: usize,
        tail_token: T,
    ) -> NodeIndex<Ix> {
        let edge = self.edges[edge_idx.index()];
        assert!(
            offset > 0 && offset < self.edge_len(edge_idx),
            "Split offset {} falls outside edge {:?}",
            offset,
            edge_idx
        );
        let midpoint = edge.get_start() + offset;
        let length = self.nodes[state.index()].get_length() + offset;
        log::trace!(
            "split {:?} at {} (depth {}) before {:?}",
            edge_idx,
            midpoint,
            length,
            tail_token
        );

        let v = self.add_internal(length);
        self.add_edge(
            v,
            tail_token,
            Edge::new(edge.get_target(), midpoint, edge.get_end()),
        );

        let edge_mut = &mut self.edges[edge_idx.index()];
        edge_mut.set_end(midpoint);
        edge_mut.set_target(v);
        v
    }

    pub fn get_node(&self, state: NodeIndex<Ix>) -> &Node<T, Ix> {
        &self.nodes[state.index()]
    }

    pub fn get_node_mut(&mut self, state: NodeIndex<Ix>) -> &mut Node<T, Ix> {
        &mut self.nodes[state.index()]
    }

    pub fn get_edge(&self, edge_idx: EdgeIndex<Ix>) -> &Edge<Ix> {
        &self.edges[edge_idx.index()]
    }

    pub fn get_end(&self) -> usize {
        self.e
    }

    pub fn set_end(&mut self, e: usize) {
        assert!(e >= self.e, "End position cannot move backwards");
        self.e = e;
    }

    pub fn span(&self, edge_idx: EdgeIndex<Ix>) -> (usize, usize) {
        self.get_edge(edge_idx).get_span(self.e)
    }

    pub fn edge_len(&self, edge_idx: EdgeIndex<Ix>) -> usize {
        let (start, end) = self.span(edge_idx);
        end - start
    }

    pub fn n_edges(&self, state: NodeIndex<Ix>) -> usize {
        self.get_node(state).n_edges()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex<Ix>, &Node<T, Ix>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeIndex::new(idx), node))
    }
}
