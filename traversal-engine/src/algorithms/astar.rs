use crate::common::{accumulate, Rank, Vertex};
use crate::edge::Weighted;
use crate::factory::NodeFactory;
use crate::frontier::CommonPriorityQueue;
use crate::graph::Graph;
use crate::node::{Node, Ranked};
use crate::tracker::{CommonHashMap, Tracker};
use crate::traverser::{Iterable, Traverser};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::Hash;

/// A heuristic estimates the cost still pending from a vertex to the destination of the
/// search. For the search to find optimal paths, the estimate must never exceed the actual
/// cost, i.e. the heuristic must be admissible. This is not checked.
pub trait Heuristic<V, R> {
    fn estimate(&self, vertex: &V) -> R;
}

impl<V, R, F> Heuristic<V, R> for F
where
    F: Fn(&V) -> R,
{
    fn estimate(&self, vertex: &V) -> R {
        self(vertex)
    }
}

/// Heuristic measuring the distance between a vertex and one fixed destination.
#[derive(Clone, Copy, Debug)]
pub struct SingleDestinationHeuristic<V, S> {
    destination: V,
    distance: S,
}

impl<V, S> SingleDestinationHeuristic<V, S> {
    pub fn new(destination: V, distance: S) -> Self {
        SingleDestinationHeuristic {
            destination,
            distance,
        }
    }

    pub fn destination(&self) -> &V {
        &self.destination
    }
}

impl<V, R, S> Heuristic<V, R> for SingleDestinationHeuristic<V, S>
where
    S: Fn(&V, &V) -> R,
{
    fn estimate(&self, vertex: &V) -> R {
        (self.distance)(vertex, &self.destination)
    }
}

/// Node of the A* search. It is ranked by the sum of the accumulated cost from the origin and
/// the estimated pending cost towards the destination. Both costs are non-negative and their sum
/// is representable, which is checked on construction and on deserialization.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct AStarNode<V, R> {
    pub vertex: V,
    cost: R,
    estimated_pending_cost: R,
}

impl<V, R: Rank> AStarNode<V, R> {
    /// # Panics
    /// Panics if either cost is negative or their sum overflows.
    pub fn new(vertex: V, cost: R, estimated_pending_cost: R) -> Self {
        accumulate(cost, estimated_pending_cost);
        AStarNode {
            vertex,
            cost,
            estimated_pending_cost,
        }
    }

    /// The accumulated cost from the origin
    pub fn cost(&self) -> R {
        self.cost
    }

    pub fn estimated_pending_cost(&self) -> R {
        self.estimated_pending_cost
    }
}

#[derive(Deserialize)]
#[serde(rename = "AStarNode")]
struct AStarNodeFields<V, R> {
    vertex: V,
    cost: R,
    estimated_pending_cost: R,
}

impl<'de, V, R> Deserialize<'de> for AStarNode<V, R>
where
    V: Deserialize<'de>,
    R: Rank + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = AStarNodeFields::<V, R>::deserialize(deserializer)?;
        if fields.cost < R::zero() || fields.estimated_pending_cost < R::zero() {
            return Err(de::Error::custom("costs must be non-negative"));
        }
        if fields.cost.checked_add(fields.estimated_pending_cost).is_none() {
            return Err(de::Error::custom(format!(
                "rank overflows: {:?} + {:?}",
                fields.cost, fields.estimated_pending_cost
            )));
        }
        Ok(AStarNode {
            vertex: fields.vertex,
            cost: fields.cost,
            estimated_pending_cost: fields.estimated_pending_cost,
        })
    }
}

impl<V: Vertex, R: Rank> Node for AStarNode<V, R> {
    type Vertex = V;

    fn vertex(&self) -> &V {
        &self.vertex
    }
}

impl<V: Vertex, R: Rank> Ranked for AStarNode<V, R> {
    type Rank = R;

    fn rank(&self) -> R {
        accumulate(self.cost, self.estimated_pending_cost)
    }
}

impl<V: Display, R: Rank + Display> Display for AStarNode<V, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "vertex: {}, rank: {}",
            self.vertex,
            accumulate(self.cost, self.estimated_pending_cost)
        )
    }
}

/// Creates [`AStarNode`]s. The heuristic is consulted once for every created node, the origin
/// included.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AStarNodeFactory<H> {
    heuristic: H,
}

impl<H> AStarNodeFactory<H> {
    pub fn new(heuristic: H) -> Self {
        AStarNodeFactory { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<E, H> NodeFactory<E> for AStarNodeFactory<H>
where
    E: Weighted,
    H: Heuristic<E::Vertex, E::Weight>,
{
    type Node = AStarNode<E::Vertex, E::Weight>;

    fn make_init_node(&self, origin: E::Vertex) -> Self::Node {
        let estimate = self.heuristic.estimate(&origin);
        AStarNode::new(origin, E::Weight::zero(), estimate)
    }

    fn make_successor_node(&self, current: &Self::Node, edge: &E) -> Self::Node {
        let destination = edge.destination().clone();
        let estimate = self.heuristic.estimate(&destination);
        AStarNode::new(
            destination,
            accumulate(current.cost, edge.weight()),
            estimate,
        )
    }
}

pub type Range<G, F, T> = Iterable<
    Traverser<G, CommonPriorityQueue<<F as NodeFactory<<G as Graph>::Edge>>::Node>, T, F>,
>;

/// Traverses `graph` in A* order, starting at `origin`: vertices are visited in ascending order
/// of their accumulated cost plus the estimate of `heuristic`.
pub fn traverse<G, H>(
    graph: G,
    origin: G::Vertex,
    heuristic: H,
) -> Range<G, AStarNodeFactory<H>, CommonHashMap<G::Vertex>>
where
    G: Graph,
    G::Vertex: Hash,
    G::Edge: Weighted,
    H: Heuristic<G::Vertex, <G::Edge as Weighted>::Weight>,
{
    traverse_with(
        graph,
        origin,
        AStarNodeFactory::new(heuristic),
        CommonHashMap::new(),
    )
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
