//! Clustering configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::RandomSampleSeeder;
use crate::domain::clustering::PrometheeCluster;
use crate::domain::sorting::TriOptions;

/// Upper bound accepted for `max_iterations`.
pub const MAX_ITERATIONS_LIMIT: usize = 10_000;

/// Clustering engine settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClusteringSettings {
    /// Iteration cap before giving up with a non-convergence error
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for the initial profile sample; random when absent
    pub seed: Option<u64>,

    /// Tie-break toward the lower-indexed category
    #[serde(default = "default_true")]
    pub assign_to_better_class: bool,

    /// Absolute per-criterion deviations in PrometheeTri
    #[serde(default = "default_true")]
    pub use_marginal_value: bool,
}

impl ClusteringSettings {
    /// Builds the engine described by these settings.
    pub fn engine(&self) -> PrometheeCluster {
        PrometheeCluster::with_options(
            self.max_iterations,
            TriOptions {
                assign_to_better_class: self.assign_to_better_class,
                use_marginal_value: self.use_marginal_value,
            },
        )
    }

    /// Seeder for the initial profiles: seeded when `seed` is set.
    pub fn seeder(&self) -> RandomSampleSeeder {
        match self.seed {
            Some(seed) => RandomSampleSeeder::from_seed(seed),
            None => RandomSampleSeeder::from_entropy(),
        }
    }

    /// Validate clustering settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_iterations == 0 || self.max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(ValidationError::InvalidMaxIterations {
                max: MAX_ITERATIONS_LIMIT,
                actual: self.max_iterations,
            });
        }
        Ok(())
    }
}

impl Default for ClusteringSettings {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            seed: None,
            assign_to_better_class: true,
            use_marginal_value: true,
        }
    }
}

fn default_max_iterations() -> usize {
    PrometheeCluster::DEFAULT_MAX_ITERATIONS
}

fn default_true() -> bool {
    true
}
