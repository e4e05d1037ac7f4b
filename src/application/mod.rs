//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ClusterAlternativesCommand, ClusterAlternativesError, ClusterAlternativesHandler,
    ClusterAlternativesOutcome,
};
