use std::io;
use thiserror::Error;

/// Everything that can go wrong between the command line and the traversal.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input graph. {0}")]
    Io(#[from] io::Error),

    #[error("Failed to deserialize input graph. {0}")]
    Json(#[from] serde_json::Error),

    #[error("The graph has no vertex '{0}'")]
    UnknownVertex(String),

    #[error("The A* search requires a goal, specify it with '--goal'")]
    MissingGoal,

    #[error("Invalid log filter.\n{0}")]
    LogFilter(String),

    #[error("Invalid {name} '{value}'. Valid values are {valid}")]
    InvalidOption {
        name: &'static str,
        value: String,
        valid: &'static str,
    },
}
