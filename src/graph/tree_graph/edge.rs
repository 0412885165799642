use crate::graph::indexing::{DefaultIx, IndexType, NodeIndex};

/// An edge owns its target and labels itself with a span `[start, end)` of the shared token buffer.
/// An open edge (`end == None`) always reaches the current end position of the tree.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Edge<Ix = DefaultIx> {
    target: NodeIndex<Ix>,
    start: usize,
    end: Option<usize>,
}

impl<Ix> Edge<Ix>
where
    Ix: IndexType,
{
    pub fn new(target: NodeIndex<Ix>, start: usize, end: Option<usize>) -> Self {
        if let Some(end) = end {
            assert!(start <= end, "Edge span [{}, {}) is reversed", start, end);
        }
        Self { target, start, end }
    }

    pub fn get_target(&self) -> NodeIndex<Ix> {
        self.target
    }

    pub fn get_start(&self) -> usize {
        self.start
    }

    pub fn get_end(&self) -> Option<usize> {
        self.end
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    // Resolve the end pointer against the current end position.
    pub fn get_span(&self, e: usize) -> (usize, usize) {
        (self.start, self.end.unwrap_or(e))
    }

    pub(crate) fn set_target(&mut self, target: NodeIndex<Ix>) {
        self.target = target;
    }

    pub(crate) fn set_end(&mut self, end: usize) {
        assert!(self.start <= end, "Cannot shorten edge before its start");
        self.end = Some(end);
    }
}
