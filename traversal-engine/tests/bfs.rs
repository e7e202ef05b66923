mod common;

use common::basic_graph;
use test_log::test;
use traversal_engine::algorithms::bfs;
use traversal_engine::decorator::{Depth, Predecessor};
use traversal_engine::factory::{BasicNodeFactory, FactoryExt};
use traversal_engine::node::Node;
use traversal_engine::tracker::{CommonHashMap, CommonMap};

fn visit_order(origin: &'static str) -> Vec<&'static str> {
    let graph = basic_graph();
    bfs::traverse(&graph, origin)
        .map(|node| node.vertex)
        .collect()
}

#[test]
fn bfs_visit_order() {
    assert_eq!(visit_order("1"), vec!["1", "2", "3", "6", "5"]);
    assert_eq!(visit_order("3"), vec!["3", "5", "6", "2"]);
    assert_eq!(visit_order("6"), vec!["6", "2"]);
    assert_eq!(visit_order("8"), vec!["8", "7", "9", "4"]);
}

#[test]
fn bfs_unknown_origin_is_a_sink() {
    assert_eq!(visit_order("42"), vec!["42"]);
}

#[test]
fn bfs_predecessor_and_depth() {
    let graph = basic_graph();
    let nodes: Vec<_> = bfs::traverse_with(
        &graph,
        "1",
        BasicNodeFactory.with_predecessor().with_depth(),
        CommonHashMap::new(),
    )
    .map(|node| (*node.vertex(), node.predecessor().copied(), node.depth()))
    .collect();

    assert_eq!(
        nodes,
        vec![
            ("1", None, 0),
            ("2", Some("1"), 1),
            ("3", Some("1"), 1),
            ("6", Some("2"), 2),
            ("5", Some("3"), 2),
        ]
    );
}

#[test]
fn bfs_depth_from_8() {
    let graph = basic_graph();
    let nodes: Vec<_> = bfs::traverse_with(
        &graph,
        "8",
        BasicNodeFactory.with_depth().with_predecessor(),
        CommonMap::new(),
    )
    .map(|node| node.to_string())
    .collect();

    assert_eq!(
        nodes,
        vec![
            "vertex: 8, depth: 0, predecessor: null",
            "vertex: 7, depth: 1, predecessor: 8",
            "vertex: 9, depth: 1, predecessor: 8",
            "vertex: 4, depth: 2, predecessor: 7",
        ]
    );
}

#[test]
fn bfs_exhaustion_is_idempotent() {
    let graph = basic_graph();
    let mut range = bfs::traverse(&graph, "6");

    assert!(range.next().is_some());
    assert!(range.next().is_some());
    assert!(range.next().is_none());
    assert!(range.next().is_none());
}
