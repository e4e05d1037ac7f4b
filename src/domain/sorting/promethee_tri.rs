//! PrometheeTri - assignment of alternatives to the category of the closest profile.
//!
//! Closeness is measured in single-criterion net flow space: profiles get
//! their flows from comparisons among themselves, alternatives from
//! comparisons against the profiles, and the weighted distance between the
//! two flow vectors decides the category.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Assignment, CategoryLabel};
use crate::domain::criteria::CriteriaSet;
use crate::domain::foundation::ValidationError;
use crate::domain::flows::{CriteriaNetFlows, NetFlowCalculator};
use crate::domain::preference::PartialPreferences;

/// Sorting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriOptions {
    /// On equal deviation prefer the lower-indexed category.
    pub assign_to_better_class: bool,
    /// Use absolute per-criterion flow differences.
    pub use_marginal_value: bool,
}

impl Default for TriOptions {
    fn default() -> Self {
        Self {
            assign_to_better_class: true,
            use_marginal_value: true,
        }
    }
}

/// PrometheeTri sorting.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrometheeTri {
    options: TriOptions,
}

impl PrometheeTri {
    pub fn new(options: TriOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> TriOptions {
        self.options
    }

    /// Weighted deviation between every alternative and every profile.
    ///
    /// # Algorithm
    /// - marginal: `Σ_c w_c · |φ_c(a) - φ_c(p)|`
    /// - signed:   `Σ_c w_c · (φ_c(a) - φ_c(p))`
    ///
    /// Returns one row per alternative, one column per profile.
    pub fn deviations(
        &self,
        criteria: &CriteriaSet,
        alternative_flows: &CriteriaNetFlows,
        profile_flows: &CriteriaNetFlows,
    ) -> Vec<Vec<f64>> {
        let weights = criteria.weights();
        (0..alternative_flows.entity_count())
            .map(|a| {
                (0..profile_flows.entity_count())
                    .map(|p| {
                        alternative_flows
                            .row(a)
                            .iter()
                            .zip(profile_flows.row(p))
                            .zip(&weights)
                            .map(|((phi_a, phi_p), w)| {
                                let gap = phi_a - phi_p;
                                if self.options.use_marginal_value {
                                    w * gap.abs()
                                } else {
                                    w * gap
                                }
                            })
                            .sum()
                    })
                    .collect()
            })
            .collect()
    }

    /// Assigns every alternative to exactly one category.
    ///
    /// `categories[p]` labels the profile in row/column `p` of the profile
    /// tensors.
    ///
    /// # Edge Cases
    /// - Equal deviations: lower-indexed category when
    ///   `assign_to_better_class`, higher-indexed otherwise
    /// - A single profile: every alternative lands in it
    ///
    /// # Errors
    /// - No profiles, or a label count differing from the profile count
    /// - Tensors that disagree on their profiles, alternatives or criteria
    pub fn assign(
        &self,
        categories: &[CategoryLabel],
        criteria: &CriteriaSet,
        alternatives_over_profiles: &PartialPreferences,
        profiles_over_alternatives: &PartialPreferences,
        profiles_over_profiles: &PartialPreferences,
    ) -> Result<Assignment, ValidationError> {
        let k = profiles_over_profiles.row_count();
        if k == 0 {
            return Err(ValidationError::empty_field("profiles"));
        }
        if categories.len() != k {
            return Err(ValidationError::invalid_format(
                "categories",
                format!("{} labels for {} profiles", categories.len(), k),
            ));
        }
        if alternatives_over_profiles.column_ids() != profiles_over_profiles.row_ids()
            || profiles_over_alternatives.row_ids() != profiles_over_profiles.row_ids()
            || profiles_over_alternatives.column_ids() != alternatives_over_profiles.row_ids()
        {
            return Err(ValidationError::invalid_format(
                "profiles",
                "preference tensors disagree on compared entities",
            ));
        }
        let criterion_count = criteria.len();
        if [
            alternatives_over_profiles,
            profiles_over_alternatives,
            profiles_over_profiles,
        ]
        .iter()
        .any(|t| t.criterion_count() != criterion_count)
        {
            return Err(ValidationError::invalid_format(
                "criteria",
                format!("tensors do not cover {} criteria", criterion_count),
            ));
        }

        let profile_flows = NetFlowCalculator::criteria_net_flows(profiles_over_profiles);
        let alternative_flows = NetFlowCalculator::criteria_net_flows_against(
            alternatives_over_profiles,
            profiles_over_alternatives,
        );
        let deviations = self.deviations(criteria, &alternative_flows, &profile_flows);

        let entries = alternative_flows
            .entity_ids()
            .iter()
            .zip(&deviations)
            .map(|(alternative, row)| {
                let index = self.closest(row);
                (alternative.clone(), categories[index].clone())
            })
            .collect();

        debug!(
            alternatives = alternative_flows.entity_count(),
            categories = categories.len(),
            "Assigned alternatives to categories"
        );

        Ok(Assignment::new(entries))
    }

    fn closest(&self, row: &[f64]) -> usize {
        let mut best = 0;
        for (index, &deviation) in row.iter().enumerate().skip(1) {
            let better = if self.options.assign_to_better_class {
                deviation < row[best]
            } else {
                deviation <= row[best]
            };
            if better {
                best = index;
            }
        }
        best
    }
}
