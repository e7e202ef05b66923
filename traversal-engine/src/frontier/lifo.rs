use crate::frontier::Frontier;

/// Depth-first frontier, using a LIFO (last in, first out) data structure. A batch is pushed in
/// order, so the last node of a batch is explored first.
pub type CommonStack<N> = Vec<N>;

impl<N> Frontier<N> for Vec<N> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn insert<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        self.extend(nodes);
    }

    fn next(&mut self) -> Option<N> {
        self.pop()
    }
}
