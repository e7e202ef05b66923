use crate::edge::Weighted;
use crate::factory::{NodeFactory, RankedNodeFactory};
use crate::frontier::CommonPriorityQueue;
use crate::graph::Graph;
use crate::node::Ranked;
use crate::tracker::{CommonHashMap, Tracker};
use crate::traverser::{Iterable, Traverser};
use std::hash::Hash;

/// Uniform-cost traversal visits the vertices in ascending order of their accumulated path
/// cost from the origin, i.e. Dijkstra's algorithm without a destination.
pub type Range<G, F, T> = Iterable<
    Traverser<G, CommonPriorityQueue<<F as NodeFactory<<G as Graph>::Edge>>::Node>, T, F>,
>;

/// Traverses `graph` in uniform-cost order, starting at `origin`. Edge weights must be
/// non-negative.
pub fn traverse<G>(
    graph: G,
    origin: G::Vertex,
) -> Range<G, RankedNodeFactory, CommonHashMap<G::Vertex>>
where
    G: Graph,
    G::Vertex: Hash,
    G::Edge: Weighted,
{
    traverse_with(graph, origin, RankedNodeFactory, CommonHashMap::new())
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
    F::Node: Ranked,
    T: Tracker<G::Vertex>,
{
    Iterable::new(Traverser::new(
        origin,
        graph,
        CommonPriorityQueue::new(),
        tracker,
        factory,
    ))
}
