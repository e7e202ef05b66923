//! Node decorators. A decorator wraps any node (including another decorator) and adds one piece
//! of bookkeeping. The inner node always comes first, the decoration second.

use crate::node::{Node, Ranked};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Access to the vertex a node was reached from. The origin has no predecessor.
pub trait Predecessor: Node {
    fn predecessor(&self) -> Option<&Self::Vertex>;
}

/// Access to the number of edges between the origin and a node.
pub trait Depth: Node {
    fn depth(&self) -> usize;
}

/// Decorates a node with the vertex of its predecessor, which makes the traversed path
/// reconstructable.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize, N::Vertex: Serialize",
    deserialize = "N: Deserialize<'de>, N::Vertex: Deserialize<'de>"
))]
pub struct PredecessorNode<N: Node> {
    #[serde(flatten)]
    pub node: N,
    pub predecessor: Option<N::Vertex>,
}

impl<N: Node> Node for PredecessorNode<N> {
    type Vertex = N::Vertex;

    fn vertex(&self) -> &N::Vertex {
        self.node.vertex()
    }
}

impl<N: Ranked> Ranked for PredecessorNode<N> {
    type Rank = N::Rank;

    fn rank(&self) -> N::Rank {
        self.node.rank()
    }
}

impl<N: Node> Predecessor for PredecessorNode<N> {
    fn predecessor(&self) -> Option<&N::Vertex> {
        self.predecessor.as_ref()
    }
}

impl<N: Depth> Depth for PredecessorNode<N> {
    fn depth(&self) -> usize {
        self.node.depth()
    }
}

impl<N> Display for PredecessorNode<N>
where
    N: Node + Display,
    N::Vertex: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.predecessor {
            Some(predecessor) => write!(f, "{}, predecessor: {}", self.node, predecessor),
            None => write!(f, "{}, predecessor: null", self.node),
        }
    }
}

/// Decorates a node with its depth, i.e. the number of edges on the discovery path from the
/// origin.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct DepthNode<N> {
    #[serde(flatten)]
    pub node: N,
    pub depth: usize,
}

impl<N: Node> Node for DepthNode<N> {
    type Vertex = N::Vertex;

    fn vertex(&self) -> &N::Vertex {
        self.node.vertex()
    }
}

impl<N: Ranked> Ranked for DepthNode<N> {
    type Rank = N::Rank;

    fn rank(&self) -> N::Rank {
        self.node.rank()
    }
}

impl<N: Node> Depth for DepthNode<N> {
    fn depth(&self) -> usize {
        self.depth
    }
}

impl<N: Predecessor> Predecessor for DepthNode<N> {
    fn predecessor(&self) -> Option<&N::Vertex> {
        self.node.predecessor()
    }
}

impl<N: Display> Display for DepthNode<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, depth: {}", self.node, self.depth)
    }
}
