//! The edge-enumeration contract between the engine and a user graph.
//!
//! The engine only ever calls [`Graph::out_edges`]. A graph type integrates in exactly one of
//! these ways:
//! - implementing [`Graph`] directly,
//! - being one of the provided std adjacency maps (`HashMap<V, Vec<E>>`, `BTreeMap<V, Vec<E>>`),
//!   or a reference to any graph,
//! - wrapping a function with [`from_fn`].
//!
//! Graphs are queried lazily, so a graph does not have to be known up front; it may be generated
//! while the traversal runs.

use crate::common::Vertex;
use crate::edge::Edge;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Debug, Formatter};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

pub trait Graph {
    type Vertex: Vertex;
    type Edge: Edge<Vertex = Self::Vertex>;
    type Edges<'a>: IntoIterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Return the outgoing edges of `vertex`. The enumeration must be finite and deterministic
    /// for the duration of a traversal.
    fn out_edges(&self, vertex: &Self::Vertex) -> Self::Edges<'_>;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Vertex = G::Vertex;
    type Edge = G::Edge;
    type Edges<'a> = G::Edges<'a> where Self: 'a;

    fn out_edges(&self, vertex: &Self::Vertex) -> Self::Edges<'_> {
        (**self).out_edges(vertex)
    }
}

/// Vertices missing from the map have no outgoing edges.
impl<V, E, S> Graph for HashMap<V, Vec<E>, S>
where
    V: Vertex + Hash,
    E: Edge<Vertex = V> + Clone,
    S: BuildHasher,
{
    type Vertex = V;
    type Edge = E;
    type Edges<'a> = std::iter::Cloned<std::slice::Iter<'a, E>> where Self: 'a;

    fn out_edges(&self, vertex: &V) -> Self::Edges<'_> {
        self.get(vertex).map(Vec::as_slice).unwrap_or(&[]).iter().cloned()
    }
}

/// Vertices missing from the map have no outgoing edges.
impl<V, E> Graph for BTreeMap<V, Vec<E>>
where
    V: Vertex + Ord,
    E: Edge<Vertex = V> + Clone,
{
    type Vertex = V;
    type Edge = E;
    type Edges<'a> = std::iter::Cloned<std::slice::Iter<'a, E>> where Self: 'a;

    fn out_edges(&self, vertex: &V) -> Self::Edges<'_> {
        self.get(vertex).map(Vec::as_slice).unwrap_or(&[]).iter().cloned()
    }
}

/// A graph defined by a function from a vertex to its outgoing edges.
pub struct FnGraph<F, V, E> {
    out_edges: F,
    phantom: PhantomData<fn(&V) -> Vec<E>>,
}

impl<F, V, E> Graph for FnGraph<F, V, E>
where
    F: Fn(&V) -> Vec<E>,
    V: Vertex,
    E: Edge<Vertex = V>,
{
    type Vertex = V;
    type Edge = E;
    type Edges<'a> = Vec<E> where Self: 'a;

    fn out_edges(&self, vertex: &V) -> Vec<E> {
        (self.out_edges)(vertex)
    }
}

impl<F: Clone, V, E> Clone for FnGraph<F, V, E> {
    fn clone(&self) -> Self {
        FnGraph {
            out_edges: self.out_edges.clone(),
            phantom: PhantomData,
        }
    }
}

impl<F, V, E> Debug for FnGraph<F, V, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnGraph").finish_non_exhaustive()
    }
}

/// Adapts a function returning the outgoing edges of a vertex into a [`Graph`].
pub fn from_fn<F, V, E>(out_edges: F) -> FnGraph<F, V, E>
where
    F: Fn(&V) -> Vec<E>,
    V: Vertex,
    E: Edge<Vertex = V>,
{
    FnGraph {
        out_edges,
        phantom: PhantomData,
    }
}
