// Follows Ukkonen's on-line suffix tree construction, generalized to two sequences.
//
// Paper: "On-line construction of suffix trees", Algorithmica 14(3), 1995.
//
// # Notes on indexing
// Everything is 0-indexed and spans have exclusive ends. Phase `idx` makes token `idx` visible:
// the end pointer shared by open edges is set to idx + 1 before any extension runs.
//
// # Notes on extensions
// Rule 1 (extending a leaf) is free thanks to open edges. Rule 2 inserts a leaf, splitting the
// active edge first if needed. Rule 3 (the token is already there) always wins and ends the phase.

use crate::graph::indexing::{DefaultIx, IndexType, NodeIndex};
use crate::graph::tree_graph::{Edge, Origin, TreeGraph};
use crate::gst::active_point::ActivePoint;
use crate::gst::sequence::CombinedSequence;
use crate::gst::token::Token;
use crate::gst::tracker::CommonSubstringTracker;

pub struct GeneralizedSuffixTree<T, Ix = DefaultIx>
where
    T: Token,
    Ix: IndexType,
{
    sequence: CombinedSequence<T>,
    graph: TreeGraph<T, Ix>,
    active: ActivePoint<T, Ix>,
    tracker: CommonSubstringTracker,
    origin: Origin,
    // Next phase to run.
    phase: usize,
}

impl<T, Ix> GeneralizedSuffixTree<T, Ix>
where
    T: Token,
    Ix: IndexType,
{
    /// An empty tree over `sequence`; call `build` (or `update` per phase) to fill it.
    pub fn new(sequence: CombinedSequence<T>) -> Self {
        // A suffix tree over n tokens has n leaves and fewer than n internal nodes.
        let n_tokens = sequence.len();
        let graph: TreeGraph<T, Ix> = TreeGraph::with_capacity(2 * n_tokens, 2 * n_tokens);
        let active = ActivePoint::new(graph.get_root());
        let tracker = CommonSubstringTracker::new(sequence.boundary());
        Self {
            sequence,
            graph,
            active,
            tracker,
            origin: Origin::A,
            phase: 0,
        }
    }

    /// Run every remaining phase.
    pub fn build(&mut self) {
        for idx in self.phase..self.sequence.len() {
            self.update(idx);
        }
        log::debug!(
            "built suffix tree over {} tokens: {} nodes, {} edges, max common length {}",
            self.sequence.len(),
            self.graph.node_count(),
            self.graph.edge_count(),
            self.tracker.get_max_length()
        );
    }

    /// Run phase `idx`, adding every suffix that ends at token `idx`. Phases must run in order.
    pub fn update(&mut self, idx: usize) {
        assert_eq!(idx, self.phase, "Phases must run in order");
        self.phase += 1;
        self.graph.set_end(idx + 1);
        self.origin = self.sequence.origin(idx);
        let token = self.sequence.get(idx);

        self.active.pending += 1;
        let mut opt_prev: Option<NodeIndex<Ix>> = None;
        while self.active.pending >= 0 {
            let tokens = self.sequence.tokens();
            if self.active.is_followed_by(&self.graph, tokens, token) {
                // Rule 3: the rest of the pending suffixes are implicitly present.
                if let Some(prev) = opt_prev {
                    self.link(prev, self.active.node);
                }
                self.active.advance_on_match(&self.graph, token);
                break;
            }

            // Rule 2: get an explicit node for the active point, then hang a new leaf off it.
            let stem = if self.active.idx != 0 {
                let edge_idx = self.active.active_edge(&self.graph);
                let (start, _) = self.graph.span(edge_idx);
                let tail_token = tokens[start + self.active.idx];
                self.graph
                    .split_edge(self.active.node, edge_idx, self.active.idx, tail_token)
            } else {
                self.active.node
            };
            let leaf = self.graph.add_leaf(self.origin);
            self.graph.add_edge(stem, token, Edge::new(leaf, idx, None));

            self.tracker.touch(&mut self.graph, stem, idx);

            if let Some(prev) = opt_prev {
                self.link(prev, stem);
            }
            opt_prev = Some(stem);

            self.active
                .canonicalize_after_insert(&self.graph, self.sequence.tokens(), idx);
        }
    }

    // Set the suffix link of a node touched earlier in this phase. The root keeps none.
    fn link(&mut self, state: NodeIndex<Ix>, target: NodeIndex<Ix>) {
        if state != self.graph.get_root() {
            self.graph.get_node_mut(state).set_failure(target);
        }
    }

    pub fn is_built(&self) -> bool {
        self.phase == self.sequence.len()
    }

    /// Length of the longest substring shared by both sequences, among the phases run so far.
    pub fn max_common_length(&self) -> usize {
        self.tracker.get_max_length()
    }

    // Convenience methods.
    pub fn get_root(&self) -> NodeIndex<Ix> {
        self.graph.get_root()
    }

    pub fn graph(&self) -> &TreeGraph<T, Ix> {
        &self.graph
    }

    pub fn sequence(&self) -> &CombinedSequence<T> {
        &self.sequence
    }

    pub fn active_point(&self) -> &ActivePoint<T, Ix> {
        &self.active
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.graph.leaf_count()
    }
}
