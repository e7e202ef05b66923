mod common;

use common::basic_graph;
use test_log::test;
use traversal_engine::algorithms::dfs;
use traversal_engine::decorator::{Depth, Predecessor};
use traversal_engine::factory::{BasicNodeFactory, FactoryExt};
use traversal_engine::node::Node;
use traversal_engine::tracker::CommonHashMap;

type Visit = (&'static str, Option<&'static str>, usize);

fn visits(origin: &'static str) -> Vec<Visit> {
    let graph = basic_graph();
    dfs::traverse_with(
        &graph,
        origin,
        BasicNodeFactory.with_predecessor().with_depth(),
        CommonHashMap::new(),
    )
    .map(|node| (*node.vertex(), node.predecessor().copied(), node.depth()))
    .collect()
}

#[test]
fn dfs_visit_order() {
    let graph = basic_graph();
    let order: Vec<_> = dfs::traverse(&graph, "1").map(|node| node.vertex).collect();
    assert_eq!(order, vec!["1", "3", "6", "2", "5"]);
}

#[test]
fn dfs_from_1() {
    // 2 is discovered from 1 first, but reached through 6 before its first node is extracted
    assert_eq!(
        visits("1"),
        vec![
            ("1", None, 0),
            ("3", Some("1"), 1),
            ("6", Some("3"), 2),
            ("2", Some("6"), 3),
            ("5", Some("3"), 2),
        ]
    );
}

#[test]
fn dfs_from_3() {
    assert_eq!(
        visits("3"),
        vec![
            ("3", None, 0),
            ("6", Some("3"), 1),
            ("2", Some("6"), 2),
            ("5", Some("3"), 1),
        ]
    );
}

#[test]
fn dfs_from_6() {
    assert_eq!(visits("6"), vec![("6", None, 0), ("2", Some("6"), 1)]);
}

#[test]
fn dfs_from_8() {
    assert_eq!(
        visits("8"),
        vec![
            ("8", None, 0),
            ("9", Some("8"), 1),
            ("4", Some("9"), 2),
            ("7", Some("4"), 3),
        ]
    );
}

#[test]
fn dfs_self_loop_is_visited_once() {
    assert_eq!(visits("5"), vec![("5", None, 0)]);
}
