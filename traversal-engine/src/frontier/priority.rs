use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::hash::{Hash, Hasher};

use crate::frontier::Frontier;
use crate::node::Ranked;

/// A queued node, identified by its insertion sequence number rather than by its value. Equal
/// nodes therefore occupy separate entries.
#[derive(Clone, Debug)]
struct Entry<N> {
    sequence: u64,
    node: N,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl<N> Eq for Entry<N> {}

impl<N> Hash for Entry<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence.hash(state)
    }
}

/// Frontier of the ranked searches. It explores the node with the lowest rank first. Nodes of
/// equal rank are explored in insertion order.
///
/// Every inserted node is kept, including nodes equal to one already queued.
#[derive(Clone, Debug)]
pub struct CommonPriorityQueue<N: Ranked> {
    queue: PriorityQueue<Entry<N>, Reverse<(N::Rank, u64)>>,
    inserted: u64,
}

impl<N: Ranked> CommonPriorityQueue<N> {
    pub fn new() -> Self {
        CommonPriorityQueue {
            queue: PriorityQueue::new(),
            inserted: 0,
        }
    }

    /// The number of queued nodes
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<N: Ranked> Default for CommonPriorityQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ranked> Frontier<N> for CommonPriorityQueue<N> {
    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn insert<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for node in nodes {
            let sequence = self.inserted;
            self.inserted += 1;
            let priority = Reverse((node.rank(), sequence));
            self.queue.push(Entry { sequence, node }, priority);
        }
    }

    fn next(&mut self) -> Option<N> {
        self.queue.pop().map(|(entry, _)| entry.node)
    }
}
