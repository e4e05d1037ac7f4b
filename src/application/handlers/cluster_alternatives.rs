//! ClusterAlternativesHandler - runs a clustering job and publishes its outcome.
//!
//! Wires the engine to its ports:
//! 1. Draws the initial profiles through the `ProfileSeeder`
//! 2. Runs the assign / update loop to convergence
//! 3. Publishes `ClusteringCompleted` through the `EventPublisher`

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::clustering::{ClusterError, ClusterResult, ClusteringCompleted, PrometheeCluster};
use crate::domain::criteria::CriteriaSet;
use crate::domain::foundation::RunId;
use crate::domain::preference::PerformanceTable;
use crate::ports::{EventPublisher, ProfileSeeder, PublishError};

/// Request to cluster a set of alternatives.
#[derive(Debug, Clone)]
pub struct ClusterAlternativesCommand {
    pub alternatives: PerformanceTable,
    pub criteria: CriteriaSet,
    pub n_categories: usize,
}

/// Outcome of a handled command.
#[derive(Debug, Clone)]
pub struct ClusterAlternativesOutcome {
    pub run_id: RunId,
    pub result: ClusterResult,
}

/// Errors from handling a clustering command.
#[derive(Debug, Error)]
pub enum ClusterAlternativesError {
    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error("failed to publish clustering event: {0}")]
    Publish(#[from] PublishError),
}

/// Handler for [`ClusterAlternativesCommand`].
pub struct ClusterAlternativesHandler {
    engine: PrometheeCluster,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ClusterAlternativesHandler {
    /// Creates a new ClusterAlternativesHandler.
    pub fn new(engine: PrometheeCluster, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            engine,
            event_publisher,
        }
    }

    /// Runs the command; nothing is published when the run fails.
    pub fn handle<S>(
        &self,
        command: ClusterAlternativesCommand,
        seeder: &mut S,
    ) -> Result<ClusterAlternativesOutcome, ClusterAlternativesError>
    where
        S: ProfileSeeder + ?Sized,
    {
        let run_id = RunId::new();
        let result = self.engine.run(
            &command.alternatives,
            &command.criteria,
            command.n_categories,
            seeder,
        )?;

        self.event_publisher
            .publish(ClusteringCompleted::from_result(run_id, &result))?;

        debug!(
            run_id = %run_id,
            groups = result.groups().len(),
            "Published ClusteringCompleted event"
        );

        Ok(ClusterAlternativesOutcome { run_id, result })
    }
}
