use crate::common::{Rank, Vertex};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// A node is the traversal-time wrapper around a vertex. It carries whatever state the
/// algorithm needs, e.g. the accumulated cost or the predecessor.
pub trait Node: Clone + Debug {
    type Vertex: Vertex;

    /// Returns the vertex this node represents
    fn vertex(&self) -> &Self::Vertex;
}

/// A node with a rank. The priority frontier explores nodes in ascending rank order.
pub trait Ranked: Node {
    type Rank: Rank;

    fn rank(&self) -> Self::Rank;
}

/// Node of the uninformed searches, consisting of the vertex only.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct BasicNode<V> {
    pub vertex: V,
}

impl<V: Vertex> Node for BasicNode<V> {
    type Vertex = V;

    fn vertex(&self) -> &V {
        &self.vertex
    }
}

impl<V: Display> Display for BasicNode<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "vertex: {}", self.vertex)
    }
}

/// Node of the uniform-cost search. The rank is the accumulated cost of the path from the
/// origin.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct RankedNode<V, R> {
    pub vertex: V,
    pub rank: R,
}

impl<V: Vertex, R: Rank> Node for RankedNode<V, R> {
    type Vertex = V;

    fn vertex(&self) -> &V {
        &self.vertex
    }
}

impl<V: Vertex, R: Rank> Ranked for RankedNode<V, R> {
    type Rank = R;

    fn rank(&self) -> R {
        self.rank
    }
}

impl<V: Display, R: Display> Display for RankedNode<V, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "vertex: {}, rank: {}", self.vertex, self.rank)
    }
}
