use crate::factory::{BasicNodeFactory, NodeFactory};
use crate::frontier::CommonStack;
use crate::graph::Graph;
use crate::tracker::{CommonHashMap, Tracker};
use crate::traverser::{Iterable, Traverser};
use std::hash::Hash;

/// Depth-first traversal follows the most recently discovered vertex first, using a LIFO
/// (last in, first out) frontier. Of the successors of a vertex, the last enumerated edge is
/// followed first.
pub type Range<G, F, T> =
    Iterable<Traverser<G, CommonStack<<F as NodeFactory<<G as Graph>::Edge>>::Node>, T, F>>;

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
        CommonStack::new(),
        tracker,
        factory,
    ))
}
