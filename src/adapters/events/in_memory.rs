//! In-memory event publisher.
//!
//! Captures published events for assertions and local inspection.

use std::sync::RwLock;

use crate::domain::clustering::ClusteringCompleted;
use crate::ports::{EventPublisher, PublishError};

/// In-memory event publisher.
///
/// # Example
///
/// ```ignore
/// let publisher = Arc::new(InMemoryEventPublisher::new());
/// publisher.publish(event)?;
/// assert_eq!(publisher.event_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventPublisher {
    published: RwLock<Vec<ClusteringCompleted>>,
}

impl InMemoryEventPublisher {
    /// Creates a new empty publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all published events; empty if the lock is poisoned.
    pub fn published_events(&self) -> Vec<ClusteringCompleted> {
        self.published
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn event_count(&self) -> usize {
        self.published.read().map(|events| events.len()).unwrap_or(0)
    }

    /// Clears all captured events.
    pub fn clear(&self) {
        if let Ok(mut events) = self.published.write() {
            events.clear();
        }
    }
}

impl EventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: ClusteringCompleted) -> Result<(), PublishError> {
        self.published
            .write()
            .map_err(|_| PublishError::Unavailable("event store lock poisoned".to_string()))?
            .push(event);
        Ok(())
    }
}
