//! Error types for the evolutionary search engine.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Failure reported by a [`FitnessEvaluator`](crate::fitness::FitnessEvaluator)
/// when it cannot produce a cost for a genome.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{0}")]
pub struct EvaluationError(pub String);

impl EvaluationError {
    /// Creates an evaluation error from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors surfaced by the search engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// A search parameter is out of range. Raised before any evaluation starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `best`/`worst` was requested from a population with no entries.
    #[error("population is empty")]
    EmptyPopulation,

    /// The fitness evaluator failed; the current generation is aborted.
    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),

    /// The fitness evaluator returned a cost outside `[0, inf)`.
    #[error("evaluator returned invalid cost {cost}")]
    InvalidCost { cost: f64 },

    /// A search-loop operation was called in the wrong lifecycle state.
    #[error("invalid search state: {0}")]
    InvalidState(String),
}
