use crate::explorer::Explorer;
use crate::factory::NodeFactory;
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::node::Node;
use crate::tracker::Tracker;
use std::iter::FusedIterator;
use tracing::trace;

/// Anything which produces the visited nodes of a traversal one at a time.
pub trait Traverse {
    type Node;

    /// Returns the next visited node, or None once the traversal is exhausted. Every call after
    /// the first None returns None as well.
    fn next(&mut self) -> Option<Self::Node>;
}

/// The Traverser drives a traversal. It owns the frontier and the tracker, and visits every
/// vertex reachable from the origin exactly once, in the order the frontier dictates.
///
/// The traversal state is exclusively owned; a traverser can be moved but not cloned.
///
/// ```compile_fail
/// use std::collections::{HashMap, VecDeque};
/// use traversal_engine::edge::BasicEdge;
/// use traversal_engine::factory::BasicNodeFactory;
/// use traversal_engine::node::BasicNode;
/// use traversal_engine::tracker::VisitState;
/// use traversal_engine::traverser::Traverser;
///
/// fn assert_clone<T: Clone>() {}
/// assert_clone::<
///     Traverser<
///         &'static HashMap<u32, Vec<BasicEdge<u32>>>,
///         VecDeque<BasicNode<u32>>,
///         HashMap<u32, VisitState>,
///         BasicNodeFactory,
///     >,
/// >();
/// ```
#[derive(Debug)]
pub struct Traverser<G, Q, T, F> {
    graph: G,
    frontier: Q,
    tracker: T,
    explorer: Explorer<F>,
}

impl<G, Q, T, F> Traverser<G, Q, T, F>
where
    G: Graph,
    F: NodeFactory<G::Edge>,
    Q: Frontier<F::Node>,
    T: Tracker<G::Vertex>,
{
    /// Seeds a traversal of `graph` starting at `origin`.
    ///
    /// # Panics
    /// Panics if `frontier` is not empty, or if `tracker` has already visited the origin.
    pub fn new(origin: G::Vertex, graph: G, mut frontier: Q, mut tracker: T, factory: F) -> Self {
        assert!(frontier.is_empty(), "Frontier must be empty.");
        trace!(?origin, "starting traversal");

        let explorer = Explorer::new(factory);
        let origin = explorer.discover::<G::Edge, T>(origin, &mut tracker);
        frontier.insert([origin]);

        Traverser {
            graph,
            frontier,
            tracker,
            explorer,
        }
    }
}

impl<G, Q, T, F> Traverser<G, Q, T, F> {
    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn frontier(&self) -> &Q {
        &self.frontier
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    pub fn factory(&self) -> &F {
        self.explorer.factory()
    }
}

impl<G, Q, T, F> Traverse for Traverser<G, Q, T, F>
where
    G: Graph,
    F: NodeFactory<G::Edge>,
    Q: Frontier<F::Node>,
    T: Tracker<G::Vertex>,
{
    type Node = F::Node;

    fn next(&mut self) -> Option<F::Node> {
        while let Some(node) = self.frontier.next() {
            // A vertex discovered repeatedly while pending leaves stale nodes behind
            if !self.tracker.set_visited(node.vertex()) {
                trace!(vertex = ?node.vertex(), "skipping visited vertex");
                continue;
            }

            trace!(vertex = ?node.vertex(), "visiting vertex");
            let successors = self
                .explorer
                .explore(&node, &self.graph, &mut self.tracker);
            self.frontier.insert(successors);
            return Some(node);
        }
        None
    }
}

impl<G, Q, T, F> IntoIterator for Traverser<G, Q, T, F>
where
    G: Graph,
    F: NodeFactory<G::Edge>,
    Q: Frontier<F::Node>,
    T: Tracker<G::Vertex>,
{
    type Item = F::Node;
    type IntoIter = Iterable<Self>;

    fn into_iter(self) -> Iterable<Self> {
        Iterable::new(self)
    }
}

/// Exposes a [`Traverse`] as an iterator. The iteration is single pass: it consumes the
/// traversal state, and once the traversal is exhausted it is never polled again.
#[derive(Debug)]
pub struct Iterable<T> {
    traverser: T,
    exhausted: bool,
}

impl<T: Traverse> Iterable<T> {
    pub fn new(traverser: T) -> Self {
        Iterable {
            traverser,
            exhausted: false,
        }
    }
}

impl<T> Iterable<T> {
    /// The wrapped traversal state
    pub fn traverser(&self) -> &T {
        &self.traverser
    }

    pub fn into_inner(self) -> T {
        self.traverser
    }
}

impl<T: Traverse> Iterator for Iterable<T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<T::Node> {
        if self.exhausted {
            return None;
        }
        let next = self.traverser.next();
        if next.is_none() {
            self.exhausted = true;
        }
        next
    }
}

impl<T: Traverse> FusedIterator for Iterable<T> {}
