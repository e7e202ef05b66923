use crate::edge::Edge;
use crate::factory::NodeFactory;
use crate::graph::Graph;
use crate::node::Node;
use crate::tracker::Tracker;
use tracing::trace;

/// The Explorer turns vertices into nodes. It creates the origin node and expands a visited
/// node into the nodes of its freshly discovered successors.
#[derive(Clone, Debug, Default)]
pub struct Explorer<F> {
    factory: F,
}

impl<F> Explorer<F> {
    pub fn new(factory: F) -> Self {
        Explorer { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Marks `origin` as discovered and returns its node.
    ///
    /// # Panics
    /// Panics if the tracker rejects the origin, i.e. the origin has already been visited.
    pub fn discover<E, T>(
        &self,
        origin: E::Vertex,
        tracker: &mut T,
    ) -> <F as NodeFactory<E>>::Node
    where
        E: Edge,
        F: NodeFactory<E>,
        T: Tracker<E::Vertex>,
    {
        assert!(
            tracker.set_discovered(&origin),
            "Origin must not have been visited before."
        );
        trace!(?origin, "discovered origin");
        self.factory.make_init_node(origin)
    }

    /// Returns the nodes of all successors of `current` which the tracker accepts as
    /// discovered, in the order the graph enumerates their edges.
    pub fn explore<G, T>(
        &self,
        current: &<F as NodeFactory<G::Edge>>::Node,
        graph: &G,
        tracker: &mut T,
    ) -> Vec<<F as NodeFactory<G::Edge>>::Node>
    where
        G: Graph,
        F: NodeFactory<G::Edge>,
        T: Tracker<G::Vertex>,
    {
        let successors: Vec<_> = graph
            .out_edges(current.vertex())
            .into_iter()
            .filter(|edge| tracker.set_discovered(edge.destination()))
            .map(|edge| self.factory.make_successor_node(current, &edge))
            .collect();
        trace!(
            vertex = ?current.vertex(),
            successors = successors.len(),
            "expanded vertex"
        );
        successors
    }
}
