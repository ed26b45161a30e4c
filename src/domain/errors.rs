//! Domain errors for the solver.

use thiserror::Error;

use crate::domain::ports::AgentError;

/// Errors that abort a solve call or prevent one from starting.
///
/// Parse faults and validation-collaborator outages are deliberately absent:
/// those are encoded as feedback and handled inside the refinement loop.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The reasoning-agent transport failed. Fatal to the current solve call;
    /// never retried at this layer.
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// A required credential or setting was missing at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A problem dataset could not be read.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Problem-generation parameters were out of range.
    #[error("Invalid problem parameters: {0}")]
    InvalidParams(String),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        SolverError::Dataset(err.to_string())
    }
}

impl From<serde_json::Error> for SolverError {
    fn from(err: serde_json::Error) -> Self {
        SolverError::Dataset(err.to_string())
    }
}
