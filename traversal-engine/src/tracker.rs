use std::collections::hash_map::RandomState;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};
use std::hash::{BuildHasher, Hash};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum VisitState {
    // Undiscovered is implemented as the tracker not containing the vertex
    Discovered,
    Visited,
}

impl VisitState {
    /// Returns true if the vertex has been discovered but not yet visited
    pub fn is_discovered(&self) -> bool {
        matches!(self, VisitState::Discovered)
    }

    /// Returns true if the vertex has been visited
    pub fn is_visited(&self) -> bool {
        matches!(self, VisitState::Visited)
    }
}

impl Display for VisitState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VisitState::Discovered => write!(f, "discovered"),
            VisitState::Visited => write!(f, "visited"),
        }
    }
}

/// A Tracker is the ledger of which vertices a traversal has already seen. It is what
/// guarantees that every vertex is emitted at most once, even in cyclic graphs.
pub trait Tracker<V> {
    /// Marks `vertex` as discovered, unless it already is known. Returns true if the vertex has
    /// not been visited yet, which means a node for it may be queued.
    fn set_discovered(&mut self, vertex: &V) -> bool;

    /// Marks `vertex` as visited. Returns true if the vertex was pending, and false if it had
    /// already been visited.
    ///
    /// # Panics
    /// Panics if `vertex` has never been discovered.
    fn set_visited(&mut self, vertex: &V) -> bool;
}

/// The default tracker for hashable vertices.
pub type CommonHashMap<V, S = RandomState> = HashMap<V, VisitState, S>;

/// Tracker for vertices which are ordered but not hashable.
pub type CommonMap<V> = BTreeMap<V, VisitState>;

impl<V, S> Tracker<V> for HashMap<V, VisitState, S>
where
    V: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn set_discovered(&mut self, vertex: &V) -> bool {
        // Lookup first so already known vertices are never cloned
        if let Some(state) = self.get(vertex) {
            return state.is_discovered();
        }
        self.insert(vertex.clone(), VisitState::Discovered);
        true
    }

    fn set_visited(&mut self, vertex: &V) -> bool {
        match self.get_mut(vertex) {
            Some(state) => mark_visited(state),
            None => panic!("Visited a vertex which hasn't been discovered yet."),
        }
    }
}

impl<V> Tracker<V> for BTreeMap<V, VisitState>
where
    V: Clone + Ord,
{
    fn set_discovered(&mut self, vertex: &V) -> bool {
        if let Some(state) = self.get(vertex) {
            return state.is_discovered();
        }
        self.insert(vertex.clone(), VisitState::Discovered);
        true
    }

    fn set_visited(&mut self, vertex: &V) -> bool {
        match self.get_mut(vertex) {
            Some(state) => mark_visited(state),
            None => panic!("Visited a vertex which hasn't been discovered yet."),
        }
    }
}

fn mark_visited(state: &mut VisitState) -> bool {
    match state {
        VisitState::Discovered => {
            *state = VisitState::Visited;
            true
        }
        VisitState::Visited => false,
    }
}

/// A tracker which remembers nothing and accepts every vertex. Only usable on acyclic graphs,
/// where it saves the bookkeeping at the cost of visiting shared successors repeatedly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullTracker;

impl<V> Tracker<V> for NullTracker {
    fn set_discovered(&mut self, _vertex: &V) -> bool {
        true
    }

    fn set_visited(&mut self, _vertex: &V) -> bool {
        true
    }
}

/// Read access to the state a tracker recorded for a vertex.
pub trait TrackerState<V> {
    /// Returns None if the vertex was never discovered
    fn state(&self, vertex: &V) -> Option<VisitState>;
}

impl<V: Eq + Hash, S: BuildHasher> TrackerState<V> for HashMap<V, VisitState, S> {
    fn state(&self, vertex: &V) -> Option<VisitState> {
        self.get(vertex).copied()
    }
}

impl<V: Ord> TrackerState<V> for BTreeMap<V, VisitState> {
    fn state(&self, vertex: &V) -> Option<VisitState> {
        self.get(vertex).copied()
    }
}
