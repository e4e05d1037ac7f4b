//! PrometheeCluster - iterative preference-based clustering.
//!
//! Starts from profiles drawn from the alternatives, then alternates
//! PrometheeTri assignment and median profile updates until an assignment
//! repeats.

use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::{
    ClusterError, ClusterResult, ClusterStatus, ConfigurationError, DegenerateCategory,
    ProfileUpdater,
};
use crate::domain::criteria::CriteriaSet;
use crate::domain::foundation::StateMachine;
use crate::domain::preference::{PerformanceTable, PreferenceCalculator};
use crate::domain::sorting::{Assignment, CategoryLabel, PrometheeTri, TriOptions};
use crate::ports::ProfileSeeder;

/// Clustering engine with an explicit iteration cap.
#[derive(Debug, Clone, Copy)]
pub struct PrometheeCluster {
    max_iterations: usize,
    tri: PrometheeTri,
}

impl Default for PrometheeCluster {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ITERATIONS)
    }
}

impl PrometheeCluster {
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;

    pub fn new(max_iterations: usize) -> Self {
        Self::with_options(max_iterations, TriOptions::default())
    }

    pub fn with_options(max_iterations: usize, options: TriOptions) -> Self {
        Self {
            max_iterations,
            tri: PrometheeTri::new(options),
        }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn options(&self) -> TriOptions {
        self.tri.options()
    }

    /// Clusters alternatives into `n_categories` groups.
    ///
    /// # Errors
    /// - `Configuration` for `k = 0`, `k >= n`, `n < 2`, a table/criteria
    ///   mismatch or invalid seed indices; nothing is computed in that case
    /// - `NonConvergence` when no assignment repeats within the cap
    pub fn run<S>(
        &self,
        alternatives: &PerformanceTable,
        criteria: &CriteriaSet,
        n_categories: usize,
        seeder: &mut S,
    ) -> Result<ClusterResult, ClusterError>
    where
        S: ProfileSeeder + ?Sized,
    {
        let table = self.validate(alternatives, criteria, n_categories)?;
        let labels = CategoryLabel::sequence(n_categories);

        let seeds = seeder.select(table.row_count(), n_categories)?;
        check_seeds(&seeds, table.row_count(), n_categories)?;
        let mut profiles =
            table.select_rows(&seeds, labels.iter().map(|l| l.to_string()).collect());

        debug!(
            alternatives = table.row_count(),
            categories = n_categories,
            seeds = ?seeds,
            "Initial profiles selected"
        );

        let mut status = ClusterStatus::Initialized;
        let mut previous: Option<Assignment> = None;
        let mut warnings = Vec::new();

        for iteration in 1..=self.max_iterations {
            status = status.transition_to(ClusterStatus::Iterating)?;

            let forward = PreferenceCalculator::partial_preferences(criteria, &table, &profiles);
            let backward = PreferenceCalculator::partial_preferences(criteria, &profiles, &table);
            let among = PreferenceCalculator::partial_preferences(criteria, &profiles, &profiles);
            let assignment = self
                .tri
                .assign(&labels, criteria, &forward, &backward, &among)?;

            if previous.as_ref() == Some(&assignment) {
                status = status.transition_to(ClusterStatus::Converged)?;
                info!(
                    iterations = iteration,
                    categories = n_categories,
                    status = %status,
                    "Clustering converged"
                );
                return Ok(ClusterResult::new(assignment, profiles, iteration, warnings));
            }

            let update = ProfileUpdater::update(&profiles, &table, &assignment);
            for category in update.empty_categories {
                warn!(category = %category, iteration, "Category received no alternatives");
                warnings.push(DegenerateCategory {
                    category,
                    iteration,
                });
            }
            profiles = update.profiles;

            debug!(iteration, "Profiles updated");
            previous = Some(assignment);
        }

        warn!(
            max_iterations = self.max_iterations,
            "Clustering did not converge"
        );
        Err(ClusterError::NonConvergence {
            iterations: self.max_iterations,
            last_assignment: previous.unwrap_or_default(),
        })
    }

    /// Checks run inputs and returns the table with columns in criteria order.
    fn validate(
        &self,
        alternatives: &PerformanceTable,
        criteria: &CriteriaSet,
        n_categories: usize,
    ) -> Result<PerformanceTable, ConfigurationError> {
        if self.max_iterations == 0 {
            return Err(ConfigurationError::InvalidIterationCap);
        }
        if n_categories == 0 {
            return Err(ConfigurationError::NoCategories);
        }
        let n = alternatives.row_count();
        if n < 2 {
            return Err(ConfigurationError::TooFewAlternatives { found: n });
        }
        if n_categories >= n {
            return Err(ConfigurationError::TooManyCategories {
                requested: n_categories,
                alternatives: n,
            });
        }
        Ok(alternatives.aligned_to(criteria)?)
    }
}

fn check_seeds(seeds: &[usize], n: usize, k: usize) -> Result<(), ConfigurationError> {
    if seeds.len() != k {
        return Err(ConfigurationError::invalid_seed(format!(
            "expected {} indices, got {}",
            k,
            seeds.len()
        )));
    }
    if let Some(&out) = seeds.iter().find(|&&i| i >= n) {
        return Err(ConfigurationError::invalid_seed(format!(
            "index {} out of range for {} alternatives",
            out, n
        )));
    }
    let distinct: HashSet<usize> = seeds.iter().copied().collect();
    if distinct.len() != seeds.len() {
        return Err(ConfigurationError::invalid_seed("indices must be distinct"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{Criterion, Direction, GeneralizedCriterion};

    /// Hands out a fixed list of seed indices.
    struct Seeds(Vec<usize>);

    impl ProfileSeeder for Seeds {
        fn select(&mut self, _: usize, _: usize) -> Result<Vec<usize>, ConfigurationError> {
            Ok(self.0.clone())
        }
    }

    fn criteria(function: GeneralizedCriterion) -> CriteriaSet {
        CriteriaSet::new(vec![
            Criterion::new("g1", 0.5, function, Direction::Max).unwrap(),
            Criterion::new("g2", 0.5, function, Direction::Max).unwrap(),
        ])
        .unwrap()
    }

    fn alternatives() -> PerformanceTable {
        PerformanceTable::builder()
            .criteria(vec!["g1", "g2"])
            .row("A", vec![10.0, 1.0])
            .row("B", vec![8.0, 2.0])
            .row("C", vec![2.0, 9.0])
            .row("D", vec![1.0, 10.0])
            .build()
            .unwrap()
    }

    // Validation Tests

    #[test]
    fn rejects_zero_categories() {
        let err = PrometheeCluster::default()
            .run(&alternatives(), &criteria(GeneralizedCriterion::Usual), 0, &mut Seeds(vec![]))
            .unwrap_err();
        assert_eq!(err, ClusterError::Configuration(ConfigurationError::NoCategories));
    }

    #[test]
    fn rejects_as_many_categories_as_alternatives() {
        let err = PrometheeCluster::default()
            .run(&alternatives(), &criteria(GeneralizedCriterion::Usual), 4, &mut Seeds(vec![0, 1, 2, 3]))
            .unwrap_err();
        assert!(matches!(
            err,
            ClusterError::Configuration(ConfigurationError::TooManyCategories { requested: 4, alternatives: 4 })
        ));
    }

    #[test]
    fn rejects_zero_iteration_cap() {
        let err = PrometheeCluster::new(0)
            .run(&alternatives(), &criteria(GeneralizedCriterion::Usual), 2, &mut Seeds(vec![0, 3]))
            .unwrap_err();
        assert_eq!(err, ClusterError::Configuration(ConfigurationError::InvalidIterationCap));
    }

    #[test]
    fn rejects_repeated_seed_indices() {
        let err = PrometheeCluster::default()
            .run(
                &alternatives(),
                &criteria(GeneralizedCriterion::Usual),
                2,
                &mut Seeds(vec![1, 1]),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ClusterError::Configuration(ConfigurationError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_seed_index() {
        let err = PrometheeCluster::default()
            .run(
                &alternatives(),
                &criteria(GeneralizedCriterion::Usual),
                2,
                &mut Seeds(vec![0, 9]),
            )
            .unwrap_err();
        assert!(err.is_configuration());
    }

    // Loop Tests

    #[test]
    fn separates_the_two_extremes() {
        let result = PrometheeCluster::default()
            .run(
                &alternatives(),
                &criteria(GeneralizedCriterion::v_shape(10.0).unwrap()),
                2,
                &mut Seeds(vec![0, 3]),
            )
            .unwrap();
        assert_eq!(result.member_sets(), vec![vec!["A", "B"], vec!["C", "D"]]);
        // first iteration assigns, second confirms
        assert_eq!(result.iterations(), 2);
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn single_iteration_cap_never_converges() {
        let err = PrometheeCluster::new(1)
            .run(
                &alternatives(),
                &criteria(GeneralizedCriterion::v_shape(10.0).unwrap()),
                2,
                &mut Seeds(vec![0, 3]),
            )
            .unwrap_err();
        match err {
            ClusterError::NonConvergence {
                iterations,
                last_assignment,
            } => {
                assert_eq!(iterations, 1);
                assert_eq!(last_assignment.len(), 4);
            }
            other => panic!("expected NonConvergence, got {other:?}"),
        }
    }

    #[test]
    fn runs_with_a_trait_object_seeder() {
        let mut boxed: Box<dyn ProfileSeeder> = Box::new(Seeds(vec![0, 3]));
        let seeder: &mut dyn ProfileSeeder = &mut boxed;
        let result = PrometheeCluster::default()
            .run(
                &alternatives(),
                &criteria(GeneralizedCriterion::v_shape(10.0).unwrap()),
                2,
                seeder,
            )
            .unwrap();
        assert_eq!(result.member_sets(), vec![vec!["A", "B"], vec!["C", "D"]]);
    }

    #[test]
    fn final_profiles_are_group_medians() {
        let result = PrometheeCluster::default()
            .run(
                &alternatives(),
                &criteria(GeneralizedCriterion::v_shape(10.0).unwrap()),
                2,
                &mut Seeds(vec![0, 3]),
            )
            .unwrap();
        assert_eq!(result.profiles().row(0), &[9.0, 1.5]);
        assert_eq!(result.profiles().row(1), &[1.5, 9.5]);
    }
}
