//! Error types for frechetum operations.

use thiserror::Error;

/// Errors that can occur while measuring, hashing or pairing curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrechetError {
    /// A curve with zero points was supplied.
    #[error("empty curve: at least one point is required")]
    EmptyCurve,

    /// Two sequences that must be index-aligned have different lengths.
    #[error("shape mismatch: {left} points against {right}")]
    ShapeMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The free-space propagation reached a state it can never reach on
    /// valid input. This is a defect, not a user error.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    /// The result sink rejected a record.
    #[error("sink failure: {0}")]
    Sink(String),

    /// A pairwise worker thread panicked.
    #[error("worker {worker} panicked")]
    WorkerPanicked {
        /// Index of the worker.
        worker: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FrechetError>;

impl FrechetError {
    /// Builds a [`FrechetError::Config`] from anything printable.
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
