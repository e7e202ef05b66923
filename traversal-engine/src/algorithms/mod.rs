//! Ready-made traversals. Each module picks the frontier of its algorithm and offers a
//! `traverse` function with default components, and a `traverse_with` function accepting any
//! node factory and tracker.

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod ucs;
