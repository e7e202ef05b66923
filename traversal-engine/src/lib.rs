//! A generic graph traversal engine.
//!
//! A traversal is assembled from four exchangeable parts: the [`Graph`](graph::Graph) which
//! enumerates outgoing edges, the [`Frontier`](frontier::Frontier) which decides the visit
//! order, the [`Tracker`](tracker::Tracker) which remembers visited vertices, and the
//! [`NodeFactory`](factory::NodeFactory) which decides what is recorded per vertex.
//! The [`algorithms`] module provides the common combinations.
//!
//! ```
//! use std::collections::HashMap;
//! use traversal_engine::algorithms::bfs;
//! use traversal_engine::edge::BasicEdge;
//!
//! let mut graph = HashMap::new();
//! graph.insert(1, vec![BasicEdge { destination: 2 }, BasicEdge { destination: 3 }]);
//! graph.insert(2, vec![BasicEdge { destination: 3 }]);
//!
//! let order: Vec<_> = bfs::traverse(&graph, 1).map(|node| node.vertex).collect();
//! assert_eq!(order, vec![1, 2, 3]);
//! ```

pub mod algorithms;
pub mod common;
pub mod decorator;
pub mod edge;
pub mod explorer;
pub mod factory;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod path;
pub mod tracker;
pub mod traverser;

pub use common::{Rank, Vertex};
pub use decorator::{Depth, DepthNode, Predecessor, PredecessorNode};
pub use edge::{BasicEdge, Edge, Weighted, WeightedEdge};
pub use factory::{FactoryExt, NodeFactory};
pub use graph::Graph;
pub use node::{BasicNode, Node, Ranked, RankedNode};
pub use traverser::{Iterable, Traverse, Traverser};
