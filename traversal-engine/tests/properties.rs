use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use traversal_engine::algorithms::{astar, bfs, dfs, ucs};
use traversal_engine::edge::WeightedEdge;
use traversal_engine::factory::{BasicNodeFactory, FactoryExt, RankedNodeFactory};
use traversal_engine::tracker::CommonMap;

type Graph = BTreeMap<u8, Vec<WeightedEdge<u8, u32>>>;

fn graphs() -> impl Strategy<Value = (Graph, u8)> {
    (1u8..12)
        .prop_flat_map(|size| {
            (
                prop::collection::vec((0..size, 0..size, 0u32..20), 0..40),
                0..size,
            )
        })
        .prop_map(|(edges, origin)| {
            let mut graph = Graph::new();
            for (source, destination, weight) in edges {
                graph
                    .entry(source)
                    .or_default()
                    .push(WeightedEdge { destination, weight });
            }
            (graph, origin)
        })
}

fn reachable(graph: &Graph, origin: u8) -> HashSet<u8> {
    let mut seen = HashSet::from([origin]);
    let mut stack = vec![origin];
    while let Some(vertex) = stack.pop() {
        for edge in graph.get(&vertex).into_iter().flatten() {
            if seen.insert(edge.destination) {
                stack.push(edge.destination);
            }
        }
    }
    seen
}

fn hop_counts(graph: &Graph, origin: u8) -> HashMap<u8, usize> {
    let mut hops = HashMap::from([(origin, 0)]);
    let mut queue = VecDeque::from([origin]);
    while let Some(vertex) = queue.pop_front() {
        let next = hops[&vertex] + 1;
        for edge in graph.get(&vertex).into_iter().flatten() {
            hops.entry(edge.destination).or_insert_with(|| {
                queue.push_back(edge.destination);
                next
            });
        }
    }
    hops
}

/// Bellman-Ford distances of all vertices reachable from `origin`
fn distances(graph: &Graph, origin: u8) -> HashMap<u8, u32> {
    let mut distance = HashMap::from([(origin, 0)]);
    let mut changed = true;
    while changed {
        changed = false;
        for (source, edges) in graph {
            let Some(&base) = distance.get(source) else {
                continue;
            };
            for edge in edges {
                let candidate = base + edge.weight;
                if distance.get(&edge.destination).map_or(true, |d| candidate < *d) {
                    distance.insert(edge.destination, candidate);
                    changed = true;
                }
            }
        }
    }
    distance
}

fn assert_visits_reachable_once(emitted: Vec<u8>, graph: &Graph, origin: u8) {
    let unique: HashSet<u8> = emitted.iter().copied().collect();
    assert_eq!(unique.len(), emitted.len(), "duplicate visit in {:?}", emitted);
    assert_eq!(emitted.first(), Some(&origin));
    assert_eq!(unique, reachable(graph, origin));
}

proptest! {
    #[test]
    fn bfs_and_dfs_visit_every_reachable_vertex_once((graph, origin) in graphs()) {
        let emitted = bfs::traverse(&graph, origin).map(|node| node.vertex).collect();
        assert_visits_reachable_once(emitted, &graph, origin);

        let emitted = dfs::traverse(&graph, origin).map(|node| node.vertex).collect();
        assert_visits_reachable_once(emitted, &graph, origin);

        let emitted = dfs::traverse_with(&graph, origin, BasicNodeFactory, CommonMap::new())
            .map(|node| node.vertex)
            .collect();
        assert_visits_reachable_once(emitted, &graph, origin);
    }

    #[test]
    fn bfs_depth_is_hop_count((graph, origin) in graphs()) {
        let hops = hop_counts(&graph, origin);
        let mut previous = 0;
        for node in bfs::traverse_with(&graph, origin, BasicNodeFactory.with_depth(), CommonMap::new()) {
            prop_assert_eq!(node.depth, hops[&node.node.vertex]);
            prop_assert!(previous <= node.depth);
            previous = node.depth;
        }
    }

    #[test]
    fn ucs_cost_is_shortest_distance((graph, origin) in graphs()) {
        let expected = distances(&graph, origin);
        let emitted: Vec<_> = ucs::traverse(&graph, origin).collect();
        let vertices: Vec<u8> = emitted.iter().map(|node| node.vertex).collect();
        assert_visits_reachable_once(vertices, &graph, origin);

        let mut previous = 0;
        for node in emitted {
            prop_assert_eq!(node.rank, expected[&node.vertex]);
            prop_assert!(previous <= node.rank);
            previous = node.rank;
        }
    }

    #[test]
    fn astar_with_zero_heuristic_is_uniform_cost((graph, origin) in graphs()) {
        let uniform: HashMap<u8, u32> = ucs::traverse_with(
            &graph,
            origin,
            RankedNodeFactory,
            CommonMap::new(),
        )
        .map(|node| (node.vertex, node.rank))
        .collect();
        let informed: HashMap<u8, u32> = astar::traverse(&graph, origin, |_: &u8| 0u32)
            .map(|node| (node.vertex, node.cost()))
            .collect();
        prop_assert_eq!(uniform, informed);
    }
}
