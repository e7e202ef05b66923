use std::collections::VecDeque;

use crate::frontier::Frontier;

/// Breadth-first frontier. It explores nodes close to the origin first, using a FIFO
/// (first in, first out) data structure.
pub type CommonQueue<N> = VecDeque<N>;

impl<N> Frontier<N> for VecDeque<N> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn insert<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        self.extend(nodes);
    }

    fn next(&mut self) -> Option<N> {
        self.pop_front()
    }
}
