use crate::factory::{BasicNodeFactory, NodeFactory};
use crate::frontier::CommonQueue;
use crate::graph::Graph;
use crate::tracker::{CommonHashMap, Tracker};
use crate::traverser::{Iterable, Traverser};
use std::hash::Hash;

/// Breadth-first traversal visits the vertices closest to the origin first, using a FIFO
/// (first in, first out) frontier.
pub type Range<G, F, T> =
    Iterable<Traverser<G, CommonQueue<<F as NodeFactory<<G as Graph>::Edge>>::Node>, T, F>>;

/// Traverses `graph` breadth-first, starting at `origin`.
pub fn traverse<G>(
    graph: G,
    origin: G::Vertex,
) -> Range<G, BasicNodeFactory, CommonHashMap<G::Vertex>>
where
    G: Graph,
    G::Vertex: Hash,
{
    traverse_with(graph, origin, BasicNodeFactory, CommonHashMap::new())
}

/// Traverses `graph` breadth-first, starting at `origin`, with the given node factory and
/// tracker.
pub fn traverse_with<G, F, T>(
    graph: G,
    origin: G::Vertex,
    factory: F,
    tracker: T,
) -> Range<G, F, T>
where
    G: Graph,
    F: NodeFactory<G::Edge>,
    T: Tracker<G::Vertex>,
{
    Iterable::new(Traverser::new(
        origin,
        graph,
        CommonQueue::new(),
        tracker,
        factory,
    ))
}
