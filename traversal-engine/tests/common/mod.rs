#![allow(dead_code)]

use std::collections::HashMap;
use traversal_engine::edge::{BasicEdge, WeightedEdge};

pub type BasicGraph = HashMap<&'static str, Vec<BasicEdge<&'static str>>>;
pub type WeightedGraph = HashMap<&'static str, Vec<WeightedEdge<&'static str, u32>>>;

/// Adjacency of the shared example graph. Edges are listed in enumeration order.
const ADJACENCY: [(&str, &[&str]); 9] = [
    ("1", &["2", "3"]),
    ("2", &["6"]),
    ("3", &["5", "6"]),
    ("5", &["5"]),
    ("6", &["2"]),
    ("4", &["7"]),
    ("7", &["4", "7", "9"]),
    ("8", &["7", "9"]),
    ("9", &["4"]),
];

pub fn number(vertex: &str) -> u32 {
    vertex.parse().unwrap()
}

pub fn basic_graph() -> BasicGraph {
    ADJACENCY
        .iter()
        .map(|(source, destinations)| {
            let edges = destinations
                .iter()
                .map(|destination| BasicEdge { destination: *destination })
                .collect();
            (*source, edges)
        })
        .collect()
}

/// The example graph, where every edge weighs the difference between its two vertex numbers.
pub fn weighted_graph() -> WeightedGraph {
    ADJACENCY
        .iter()
        .map(|(source, destinations)| {
            let edges = destinations
                .iter()
                .map(|destination| WeightedEdge {
                    destination: *destination,
                    weight: number(source).abs_diff(number(destination)),
                })
                .collect();
            (*source, edges)
        })
        .collect()
}
