//! Error types.

use thiserror::Error;

/// Errors raised while building instances or solvers.
///
/// Solving itself never fails: a time budget running out is reported
/// through [`SolveStatus::Timeout`](crate::solver::SolveStatus::Timeout).
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Malformed dimensions or non-positive processing times.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// The text representation of an instance could not be read.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A solver parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
