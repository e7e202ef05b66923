use crate::common::{Rank, Vertex};
use serde::{Deserialize, Serialize};

/// A directed connection to a destination vertex. Edges are produced on demand by a
/// [`Graph`](crate::graph::Graph) and never stored by the engine beyond one expansion step.
pub trait Edge {
    type Vertex: Vertex;

    /// Returns the vertex this edge points to
    fn destination(&self) -> &Self::Vertex;
}

/// An edge carrying a weight, required by the ranked searches.
pub trait Weighted: Edge {
    type Weight: Rank;

    /// Returns the cost of traversing this edge
    fn weight(&self) -> Self::Weight;
}

/// Edge without any payload besides its destination.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct BasicEdge<V> {
    pub destination: V,
}

impl<V: Vertex> Edge for BasicEdge<V> {
    type Vertex = V;

    fn destination(&self) -> &V {
        &self.destination
    }
}

/// Edge with a destination and a weight.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct WeightedEdge<V, W> {
    pub destination: V,
    pub weight: W,
}

impl<V: Vertex, W: Rank> Edge for WeightedEdge<V, W> {
    type Vertex = V;

    fn destination(&self) -> &V {
        &self.destination
    }
}

impl<V: Vertex, W: Rank> Weighted for WeightedEdge<V, W> {
    type Weight = W;

    fn weight(&self) -> W {
        self.weight
    }
}

/// `(destination, weight)` pairs are weighted edges as well.
impl<V: Vertex, W: Rank> Edge for (V, W) {
    type Vertex = V;

    fn destination(&self) -> &V {
        &self.0
    }
}

impl<V: Vertex, W: Rank> Weighted for (V, W) {
    type Weight = W;

    fn weight(&self) -> W {
        self.1
    }
}
