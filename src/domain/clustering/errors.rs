//! Clustering error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::preference::CriteriaMismatch;
use crate::domain::sorting::Assignment;

/// Inputs rejected before any computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("number of categories must be at least 1")]
    NoCategories,

    #[error("{requested} categories requested for only {alternatives} alternatives")]
    TooManyCategories { requested: usize, alternatives: usize },

    #[error("clustering needs at least 2 alternatives, found {found}")]
    TooFewAlternatives { found: usize },

    #[error("iteration cap must be at least 1")]
    InvalidIterationCap,

    #[error(transparent)]
    CriteriaMismatch(#[from] CriteriaMismatch),

    #[error("invalid initial profiles: {reason}")]
    InvalidSeed { reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ConfigurationError {
    pub fn invalid_seed(reason: impl Into<String>) -> Self {
        ConfigurationError::InvalidSeed {
            reason: reason.into(),
        }
    }
}

/// Failure of a clustering run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("no stable assignment after {iterations} iterations")]
    NonConvergence {
        iterations: usize,
        last_assignment: Assignment,
    },

    #[error("invalid run state: {0}")]
    InvalidState(String),
}

impl ClusterError {
    /// Returns true when the run was rejected before computing anything.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ClusterError::Configuration(_))
    }
}

impl From<ValidationError> for ClusterError {
    fn from(err: ValidationError) -> Self {
        ClusterError::InvalidState(err.to_string())
    }
}
