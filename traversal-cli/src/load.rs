use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use traversal_engine::edge::WeightedEdge;

use crate::error::CliError;

pub type Vertex = String;
pub type Edges = HashMap<Vertex, Vec<WeightedEdge<Vertex, u64>>>;

/// An edge as written in a graph file
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    destination: Vertex,
    #[serde(default = "default_weight")]
    weight: u64,
}

fn default_weight() -> u64 {
    1
}

/// The graph file format:
/// `{"edges": {"a": [{"destination": "b", "weight": 2}]}, "positions": {"a": [0, 0]}}`
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct GraphFile {
    edges: HashMap<Vertex, Vec<EdgeEntry>>,
    #[serde(default)]
    positions: HashMap<Vertex, (i64, i64)>,
}

/// A graph loaded into memory. The adjacency map is itself a traversable graph.
#[derive(Debug, Clone, Default)]
pub struct LoadedGraph {
    edges: Edges,
    positions: HashMap<Vertex, (i64, i64)>,
}

impl LoadedGraph {
    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    /// A vertex exists if it has outgoing edges or is the destination of an edge
    pub fn contains(&self, vertex: &str) -> bool {
        self.edges.contains_key(vertex)
            || self
                .edges
                .values()
                .flatten()
                .any(|edge| edge.destination == vertex)
    }

    /// Returns an error unless `vertex` exists in the graph
    pub fn check_vertex(&self, vertex: &str) -> Result<(), CliError> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(CliError::UnknownVertex(vertex.to_string()))
        }
    }

    /// The Manhattan distance between the positions of two vertices. A vertex without a position
    /// is estimated to be at the goal.
    pub fn manhattan_distance(&self, vertex: &str, goal: &str) -> u64 {
        match (self.positions.get(vertex), self.positions.get(goal)) {
            (Some((x1, y1)), Some((x2, y2))) => x1.abs_diff(*x2) + y1.abs_diff(*y2),
            _ => 0,
        }
    }
}

/// Parse a graph from its JSON representation
pub fn parse_graph(content: &str) -> Result<LoadedGraph, CliError> {
    let file: GraphFile = serde_json::from_str(content)?;

    let edges = file
        .edges
        .into_iter()
        .map(|(source, entries)| {
            let edges = entries
                .into_iter()
                .map(|entry| WeightedEdge {
                    destination: entry.destination,
                    weight: entry.weight,
                })
                .collect();
            (source, edges)
        })
        .collect();

    Ok(LoadedGraph {
        edges,
        positions: file.positions,
    })
}

/// Load a graph from a file
pub fn load_graph(graph_path: &str) -> Result<LoadedGraph, CliError> {
    let mut file = File::open(graph_path)?;

    let mut content = String::new();
    file.read_to_string(&mut content)?;

    parse_graph(&content)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;
    use test_log::test;

    const GRAPH: &str = r#"{
        "edges": {
            "a": [{"destination": "b", "weight": 3}, {"destination": "c"}],
            "c": [{"destination": "a", "weight": 0}]
        },
        "positions": {"a": [0, 0], "b": [2, -1]}
    }"#;

    #[test]
    fn test_parse_graph() {
        let graph = parse_graph(GRAPH).unwrap();

        assert_eq!(
            graph.edges()["a"],
            vec![
                WeightedEdge {
                    destination: "b".to_string(),
                    weight: 3
                },
                WeightedEdge {
                    destination: "c".to_string(),
                    weight: 1
                },
            ]
        );
        assert_eq!(graph.edges()["c"][0].weight, 0);
        assert!(!graph.edges().contains_key("b"));
    }

    #[test]
    fn test_contains() {
        let graph = parse_graph(GRAPH).unwrap();

        assert!(graph.contains("a"));
        assert!(graph.contains("b"));
        assert!(graph.contains("c"));
        assert!(!graph.contains("d"));
        assert!(graph.check_vertex("b").is_ok());
        assert!(matches!(
            graph.check_vertex("d"),
            Err(CliError::UnknownVertex(vertex)) if vertex == "d"
        ));
    }

    #[test]
    fn test_manhattan_distance() {
        let graph = parse_graph(GRAPH).unwrap();

        assert_eq!(graph.manhattan_distance("a", "b"), 3);
        assert_eq!(graph.manhattan_distance("b", "b"), 0);
        assert_eq!(graph.manhattan_distance("c", "b"), 0);
    }

    #[test]
    fn test_positions_are_optional() {
        let graph = parse_graph(r#"{"edges": {"x": [{"destination": "y"}]}}"#).unwrap();
        assert_eq!(graph.manhattan_distance("x", "y"), 0);
    }

    #[test]
    fn test_parse_invalid_graph() {
        assert!(matches!(
            parse_graph(r#"{"edges": {"x": [{"target": "y"}]}}"#),
            Err(CliError::Json(_))
        ));
        assert!(matches!(
            parse_graph(r#"{"edges": {"x": [{"destination": "y", "weight": -1}]}}"#),
            Err(CliError::Json(_))
        ));
    }

    #[test]
    fn test_load_graph() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GRAPH.as_bytes()).unwrap();

        let graph = load_graph(file.path().to_str().unwrap()).unwrap();
        assert_eq!(graph.edges().len(), 2);

        assert!(matches!(
            load_graph("does/not/exist.json"),
            Err(CliError::Io(_))
        ));
    }
}
