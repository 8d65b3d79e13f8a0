//! Error types for the scaffold pipeline.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Anything that stops a scaffold run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Please provide a project name.")]
    Usage,

    #[error("Directory '{0}' already exists and is not empty.")]
    ProjectExists(String),

    #[error(transparent)]
    Step(#[from] StepError),
}

/// A pipeline step that failed, with the step's own message attached.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StepError {
    /// Position of the failing step in the plan
    pub index: usize,
    pub description: String,
    pub message: String,
    #[source]
    pub failure: StepFailure,
}

/// What actually went wrong underneath a step.
#[derive(Debug, Error)]
pub enum StepFailure {
    #[error("'{program}' was not found on PATH")]
    NotFound { program: String },

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command '{program}' failed with {status}")]
    Status { program: String, status: ExitStatus },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
