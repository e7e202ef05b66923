pub mod fifo;
pub mod lifo;
pub mod priority;

pub use fifo::CommonQueue;
pub use lifo::CommonStack;
pub use priority::CommonPriorityQueue;

/// A Frontier holds the nodes waiting to be visited and defines in which order they are
/// explored. The order policy is the only thing distinguishing the search algorithms.
///
/// A frontier may contain several nodes for the same vertex; the traverser discards the stale
/// ones when they are extracted.
pub trait Frontier<N> {
    /// Returns true if no node is pending.
    fn is_empty(&self) -> bool;

    /// Queue a batch of nodes.
    fn insert<I: IntoIterator<Item = N>>(&mut self, nodes: I);

    /// Removes and returns the next node to be explored, or none if the frontier is empty.
    fn next(&mut self) -> Option<N>;
}
