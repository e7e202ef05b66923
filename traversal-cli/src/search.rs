use crate::error::CliError;
use crate::load::{LoadedGraph, Vertex};
use crate::options::{AlgorithmOption, CliOptions, OutputFormat, TrackerOption};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use traversal_engine::algorithms::astar::{self, AStarNodeFactory, SingleDestinationHeuristic};
use traversal_engine::algorithms::{bfs, dfs, ucs};
use traversal_engine::decorator::Predecessor;
use traversal_engine::factory::{BasicNodeFactory, FactoryExt, RankedNodeFactory};
use traversal_engine::node::{Node, Ranked};
use traversal_engine::path::PredecessorMap;
use traversal_engine::tracker::{CommonHashMap, CommonMap, Tracker};

/// What a `visit` run printed
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Summary {
    pub visited: usize,
    pub goal_found: bool,
}

/// A path found by the `path` subcommand. The cost is only known to the ranked searches.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FoundPath {
    pub vertices: Vec<Vertex>,
    pub cost: Option<u64>,
}

/// The Manhattan distance heuristic of the A* search
fn manhattan(
    graph: &LoadedGraph,
    goal: Vertex,
) -> SingleDestinationHeuristic<Vertex, impl Fn(&Vertex, &Vertex) -> u64 + '_> {
    SingleDestinationHeuristic::new(goal, move |vertex: &Vertex, goal: &Vertex| {
        graph.manhattan_distance(vertex, goal)
    })
}

fn check_endpoints(graph: &LoadedGraph, options: &CliOptions) -> Result<(), CliError> {
    graph.check_vertex(&options.origin)?;
    if let Some(goal) = &options.goal {
        graph.check_vertex(goal)?;
    }
    Ok(())
}

/// Visit subcommand. Writes every visited node to `out`, stopping at the goal if one is given.
pub fn visit(
    graph: &LoadedGraph,
    options: &CliOptions,
    out: &mut dyn Write,
) -> Result<Summary, CliError> {
    check_endpoints(graph, options)?;
    match options.tracker {
        TrackerOption::Hash => visit_with(graph, options, CommonHashMap::new(), out),
        TrackerOption::Ordered => visit_with(graph, options, CommonMap::new(), out),
    }
}

fn visit_with<T: Tracker<Vertex>>(
    graph: &LoadedGraph,
    options: &CliOptions,
    tracker: T,
    out: &mut dyn Write,
) -> Result<Summary, CliError> {
    let origin = options.origin.clone();
    let edges = graph.edges();

    match options.algorithm {
        AlgorithmOption::Bfs => {
            let factory = BasicNodeFactory.with_predecessor().with_depth();
            emit(bfs::traverse_with(edges, origin, factory, tracker), options, out)
        }
        AlgorithmOption::Dfs => {
            let factory = BasicNodeFactory.with_predecessor().with_depth();
            emit(dfs::traverse_with(edges, origin, factory, tracker), options, out)
        }
        AlgorithmOption::Ucs => {
            let factory = RankedNodeFactory.with_predecessor().with_depth();
            emit(ucs::traverse_with(edges, origin, factory, tracker), options, out)
        }
        AlgorithmOption::Astar => {
            let goal = options.goal.clone().ok_or(CliError::MissingGoal)?;
            let factory = AStarNodeFactory::new(manhattan(graph, goal))
                .with_predecessor()
                .with_depth();
            emit(astar::traverse_with(edges, origin, factory, tracker), options, out)
        }
    }
}

fn emit<I, N>(nodes: I, options: &CliOptions, out: &mut dyn Write) -> Result<Summary, CliError>
where
    I: Iterator<Item = N>,
    N: Node<Vertex = Vertex> + Display + Serialize,
{
    let mut summary = Summary::default();
    for node in nodes {
        match options.format {
            OutputFormat::Text => writeln!(out, "{}", node)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&node)?)?,
        }
        summary.visited += 1;

        if options.goal.as_ref() == Some(node.vertex()) {
            summary.goal_found = true;
            break;
        }
    }
    Ok(summary)
}

/// Path subcommand. Traverses the graph until the goal is visited and reconstructs the path to it
/// from the predecessor links. Returns None if the goal is unreachable.
pub fn find_path(
    graph: &LoadedGraph,
    options: &CliOptions,
) -> Result<Option<FoundPath>, CliError> {
    check_endpoints(graph, options)?;
    let goal = options.goal.clone().ok_or(CliError::MissingGoal)?;
    let found = match options.tracker {
        TrackerOption::Hash => find_path_with(graph, options, &goal, CommonHashMap::new()),
        TrackerOption::Ordered => find_path_with(graph, options, &goal, CommonMap::new()),
    };
    Ok(found)
}

fn find_path_with<T: Tracker<Vertex>>(
    graph: &LoadedGraph,
    options: &CliOptions,
    goal: &Vertex,
    tracker: T,
) -> Option<FoundPath> {
    let origin = options.origin.clone();
    let edges = graph.edges();

    match options.algorithm {
        AlgorithmOption::Bfs => {
            let factory = BasicNodeFactory.with_predecessor();
            let nodes = bfs::traverse_with(edges, origin, factory, tracker);
            follow(nodes, goal).map(|(vertices, _)| FoundPath {
                vertices,
                cost: None,
            })
        }
        AlgorithmOption::Dfs => {
            let factory = BasicNodeFactory.with_predecessor();
            let nodes = dfs::traverse_with(edges, origin, factory, tracker);
            follow(nodes, goal).map(|(vertices, _)| FoundPath {
                vertices,
                cost: None,
            })
        }
        AlgorithmOption::Ucs => {
            let factory = RankedNodeFactory.with_predecessor();
            let nodes = ucs::traverse_with(edges, origin, factory, tracker);
            follow(nodes, goal).map(|(vertices, node)| FoundPath {
                vertices,
                cost: Some(node.rank()),
            })
        }
        AlgorithmOption::Astar => {
            let heuristic = manhattan(graph, goal.clone());
            let factory = AStarNodeFactory::new(heuristic).with_predecessor();
            let nodes = astar::traverse_with(edges, origin, factory, tracker);
            follow(nodes, goal).map(|(vertices, node)| FoundPath {
                vertices,
                cost: Some(node.node.cost()),
            })
        }
    }
}

/// Records predecessor links until `goal` is visited, then returns the path to it and its node
fn follow<I, N>(nodes: I, goal: &Vertex) -> Option<(Vec<Vertex>, N)>
where
    I: Iterator<Item = N>,
    N: Predecessor<Vertex = Vertex>,
{
    let mut links = PredecessorMap::new();
    for node in nodes {
        links.insert(&node);
        if node.vertex() == goal {
            let path = links.path_to(goal)?;
            return Some((path, node));
        }
    }
    None
}
