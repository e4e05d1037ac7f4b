//! Command handlers.

mod cluster_alternatives;

pub use cluster_alternatives::{
    ClusterAlternativesCommand, ClusterAlternativesError, ClusterAlternativesHandler,
    ClusterAlternativesOutcome,
};
