use crate::common::Vertex;
use crate::decorator::Predecessor;
use std::collections::HashMap;
use std::hash::Hash;

/// Collects the predecessor links of the nodes emitted by a traversal, such that the path from
/// the origin to any emitted vertex can be reconstructed.
#[derive(Clone, Debug)]
pub struct PredecessorMap<V> {
    links: HashMap<V, Option<V>>,
}

impl<V: Vertex + Hash> PredecessorMap<V> {
    pub fn new() -> Self {
        PredecessorMap {
            links: HashMap::new(),
        }
    }

    /// Records the predecessor of `node`. The first node recorded for a vertex wins, as a
    /// traversal emits every vertex only once.
    pub fn insert<N: Predecessor<Vertex = V>>(&mut self, node: &N) {
        self.links
            .entry(node.vertex().clone())
            .or_insert_with(|| node.predecessor().cloned());
    }

    /// Returns the predecessor of `vertex`. None means the vertex is unknown, `Some(None)`
    /// means it is the origin.
    pub fn predecessor(&self, vertex: &V) -> Option<Option<&V>> {
        self.links.get(vertex).map(Option::as_ref)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.links.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the vertices on the path from the origin to `destination`, origin first, or none
    /// if `destination` has not been recorded.
    pub fn path_to(&self, destination: &V) -> Option<Vec<V>> {
        let mut path = vec![destination.clone()];
        let mut current = self.links.get(destination)?;

        while let Some(predecessor) = current {
            // Links form a tree rooted in the origin, so a longer walk means a broken chain
            if path.len() > self.links.len() {
                return None;
            }
            path.push(predecessor.clone());
            current = self.links.get(predecessor)?;
        }

        path.reverse();
        Some(path)
    }
}

impl<V: Vertex + Hash> Default for PredecessorMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, N> Extend<N> for PredecessorMap<V>
where
    V: Vertex + Hash,
    N: Predecessor<Vertex = V>,
{
    fn extend<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for node in nodes {
            self.insert(&node);
        }
    }
}

impl<V, N> FromIterator<N> for PredecessorMap<V>
where
    V: Vertex + Hash,
    N: Predecessor<Vertex = V>,
{
    fn from_iter<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        let mut map = PredecessorMap::new();
        map.extend(nodes);
        map
    }
}
