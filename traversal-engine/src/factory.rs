use crate::common::{accumulate, Rank};
use crate::decorator::{Depth, DepthNode, PredecessorNode};
use crate::edge::{Edge, Weighted};
use crate::node::{BasicNode, Node, RankedNode};

/// A NodeFactory decides which information a traversal attaches to every vertex it reaches.
pub trait NodeFactory<E: Edge> {
    type Node: Node<Vertex = E::Vertex>;

    /// Creates the node of the origin, i.e. the vertex the traversal starts from.
    fn make_init_node(&self, origin: E::Vertex) -> Self::Node;

    /// Creates the node of the destination of `edge`, reached from `current`.
    fn make_successor_node(&self, current: &Self::Node, edge: &E) -> Self::Node;
}

/// Creates [`BasicNode`]s, which carry the vertex only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BasicNodeFactory;

impl<E: Edge> NodeFactory<E> for BasicNodeFactory {
    type Node = BasicNode<E::Vertex>;

    fn make_init_node(&self, origin: E::Vertex) -> Self::Node {
        BasicNode { vertex: origin }
    }

    fn make_successor_node(&self, _current: &Self::Node, edge: &E) -> Self::Node {
        BasicNode {
            vertex: edge.destination().clone(),
        }
    }
}

/// Creates [`RankedNode`]s ranked by the accumulated edge weights from the origin.
///
/// # Panics
/// Creating a successor panics if a weight is negative or the accumulated cost overflows.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RankedNodeFactory;

impl<E> NodeFactory<E> for RankedNodeFactory
where
    E: Weighted,
{
    type Node = RankedNode<E::Vertex, E::Weight>;

    fn make_init_node(&self, origin: E::Vertex) -> Self::Node {
        RankedNode {
            vertex: origin,
            rank: E::Weight::zero(),
        }
    }

    fn make_successor_node(&self, current: &Self::Node, edge: &E) -> Self::Node {
        RankedNode {
            vertex: edge.destination().clone(),
            rank: accumulate(current.rank, edge.weight()),
        }
    }
}

/// Decorates the nodes of the wrapped factory with the vertex they were reached from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PredecessorFactory<F> {
    pub inner: F,
}

impl<E, F> NodeFactory<E> for PredecessorFactory<F>
where
    E: Edge,
    F: NodeFactory<E>,
{
    type Node = PredecessorNode<F::Node>;

    fn make_init_node(&self, origin: E::Vertex) -> Self::Node {
        PredecessorNode {
            node: self.inner.make_init_node(origin),
            predecessor: None,
        }
    }

    fn make_successor_node(&self, current: &Self::Node, edge: &E) -> Self::Node {
        PredecessorNode {
            node: self.inner.make_successor_node(&current.node, edge),
            predecessor: Some(current.vertex().clone()),
        }
    }
}

/// Decorates the nodes of the wrapped factory with their distance in edges from the origin.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DepthFactory<F> {
    pub inner: F,
}

impl<E, F> NodeFactory<E> for DepthFactory<F>
where
    E: Edge,
    F: NodeFactory<E>,
{
    type Node = DepthNode<F::Node>;

    fn make_init_node(&self, origin: E::Vertex) -> Self::Node {
        DepthNode {
            node: self.inner.make_init_node(origin),
            depth: 0,
        }
    }

    fn make_successor_node(&self, current: &Self::Node, edge: &E) -> Self::Node {
        DepthNode {
            node: self.inner.make_successor_node(&current.node, edge),
            depth: current.depth() + 1,
        }
    }
}

/// Fluent composition of the factory decorators, e.g.
/// `BasicNodeFactory.with_predecessor().with_depth()`.
pub trait FactoryExt: Sized {
    fn with_predecessor(self) -> PredecessorFactory<Self> {
        PredecessorFactory { inner: self }
    }

    fn with_depth(self) -> DepthFactory<Self> {
        DepthFactory { inner: self }
    }
}

impl<F> FactoryExt for F {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::decorator::Predecessor;
    use crate::edge::{BasicEdge, WeightedEdge};
    use crate::node::Ranked;
    use test_log::test;

    #[test]
    fn test_basic_factory() {
        let factory = BasicNodeFactory;
        let origin = NodeFactory::<BasicEdge<u32>>::make_init_node(&factory, 1);
        assert_eq!(origin, BasicNode { vertex: 1 });

        let successor = factory.make_successor_node(&origin, &BasicEdge { destination: 2 });
        assert_eq!(successor, BasicNode { vertex: 2 });
    }

    #[test]
    fn test_ranked_factory_accumulates_weight() {
        let factory = RankedNodeFactory;
        let origin = NodeFactory::<WeightedEdge<&str, u32>>::make_init_node(&factory, "a");
        assert_eq!(origin.rank(), 0);

        let b = factory.make_successor_node(
            &origin,
            &WeightedEdge {
                destination: "b",
                weight: 3,
            },
        );
        let c = factory.make_successor_node(
            &b,
            &WeightedEdge {
                destination: "c",
                weight: 4,
            },
        );
        assert_eq!(b, RankedNode { vertex: "b", rank: 3 });
        assert_eq!(c, RankedNode { vertex: "c", rank: 7 });
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn test_ranked_factory_overflow_panics() {
        let factory = RankedNodeFactory;
        let origin = RankedNode {
            vertex: 1,
            rank: u8::MAX - 1,
        };
        factory.make_successor_node(&origin, &(2, 2u8));
    }

    #[test]
    #[should_panic(expected = "increase must be non-negative.")]
    fn test_ranked_factory_negative_weight_panics() {
        let factory = RankedNodeFactory;
        let origin = NodeFactory::<(u32, i32)>::make_init_node(&factory, 1);
        factory.make_successor_node(&origin, &(2, -1));
    }

    #[test]
    fn test_decorated_factories() {
        let factory = RankedNodeFactory.with_predecessor().with_depth();
        let origin = NodeFactory::<(char, u64)>::make_init_node(&factory, 'a');
        assert_eq!(origin.vertex(), &'a');
        assert_eq!(origin.rank(), 0);
        assert_eq!(origin.predecessor(), None);
        assert_eq!(origin.depth(), 0);

        let b = factory.make_successor_node(&origin, &('b', 5u64));
        let c = factory.make_successor_node(&b, &('c', 1u64));
        assert_eq!(c.vertex(), &'c');
        assert_eq!(c.rank(), 6);
        assert_eq!(c.predecessor(), Some(&'b'));
        assert_eq!(c.depth(), 2);
    }

    #[test]
    fn test_decorator_order_is_free() {
        let factory = BasicNodeFactory.with_depth().with_predecessor();
        let origin = NodeFactory::<BasicEdge<u8>>::make_init_node(&factory, 0);
        let next = factory.make_successor_node(&origin, &BasicEdge { destination: 1 });

        assert_eq!(next.predecessor(), Some(&0));
        assert_eq!(next.depth(), 1);
        assert_eq!(next.to_string(), "vertex: 1, depth: 1, predecessor: 0");
    }
}
