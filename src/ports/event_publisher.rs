//! EventPublisher port - Interface for publishing clustering events.
//!
//! The handler publishes through this port without knowing the transport.

use thiserror::Error;

use crate::domain::clustering::ClusteringCompleted;

/// Publishing failure reported by an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error("event transport unavailable: {0}")]
    Unavailable(String),
}

/// Port for publishing clustering events.
///
/// # Example
///
/// ```ignore
/// let event = ClusteringCompleted::from_result(RunId::new(), &result);
/// publisher.publish(event)?;
/// ```
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    fn publish(&self, event: ClusteringCompleted) -> Result<(), PublishError>;
}
