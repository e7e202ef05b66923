/// The subcommands available
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum SubcommandOption {
    #[default]
    Visit,
    Path,
}

/// The traversal algorithms available
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum AlgorithmOption {
    /// Breadth-first search
    #[default]
    Bfs,
    /// Depth-first search
    Dfs,
    /// Uniform-cost search
    Ucs,
    /// A* search, guided by the Manhattan distance to the goal
    Astar,
}

impl AlgorithmOption {
    /// Returns true if the algorithm visits vertices in order of their path cost
    pub fn is_ranked(&self) -> bool {
        matches!(self, AlgorithmOption::Ucs | AlgorithmOption::Astar)
    }
}

/// The trackers available
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum TrackerOption {
    /// Tracks vertices in a hash map
    #[default]
    Hash,
    /// Tracks vertices in an ordered map
    Ordered,
}

/// How emitted nodes are printed
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// The options that can be passed to the CLI
#[derive(Debug, Default)]
pub struct CliOptions {
    // General
    pub subcommand: SubcommandOption,
    pub quiet: bool,
    pub format: OutputFormat,

    // Input
    pub graph_path: String,
    pub origin: String,
    pub goal: Option<String>,

    // Traversal
    pub algorithm: AlgorithmOption,
    pub tracker: TrackerOption,
}
