//! Preference Calculator - partial preferences and aggregated preference indices.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{PartialPreferences, PerformanceTable, PreferenceMatrix};
use crate::domain::criteria::CriteriaSet;

/// Aggregated indices together with the partial tensor they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub aggregated: PreferenceMatrix,
    pub partial: PartialPreferences,
}

/// Preferences computed in both directions between alternatives and profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePreferences {
    /// Alternatives as rows, profiles as columns.
    pub alternatives_over_profiles: Preferences,
    /// Profiles as rows, alternatives as columns.
    pub profiles_over_alternatives: Preferences,
}

/// Pairwise preference computation.
///
/// All functions expect performance tables whose columns follow the order of
/// the criteria set (see [`PerformanceTable::aligned_to`]).
pub struct PreferenceCalculator;

impl PreferenceCalculator {
    /// Computes the partial preference tensor of `rows` over `columns`.
    ///
    /// # Algorithm
    /// For each criterion c, row i and column j:
    /// `P_c(i, j) = F_c(direction_c(g_c(i) - g_c(j)))`
    pub fn partial_preferences(
        criteria: &CriteriaSet,
        rows: &PerformanceTable,
        columns: &PerformanceTable,
    ) -> PartialPreferences {
        debug_assert_eq!(rows.criterion_ids(), criteria.names().as_slice());
        debug_assert_eq!(columns.criterion_ids(), criteria.names().as_slice());

        let mut values =
            Vec::with_capacity(criteria.len() * rows.row_count() * columns.row_count());

        for (c, criterion) in criteria.iter().enumerate() {
            for i in 0..rows.row_count() {
                let a = rows.value(i, c);
                for j in 0..columns.row_count() {
                    values.push(criterion.preference(a, columns.value(j, c)));
                }
            }
        }

        PartialPreferences::from_parts(
            criteria.names(),
            rows.row_ids().to_vec(),
            columns.row_ids().to_vec(),
            values,
        )
    }

    /// Aggregates a partial tensor into preference indices.
    ///
    /// # Algorithm
    /// `π(i, j) = Σ_c w_c · P_c(i, j) / Σ_c w_c`
    ///
    /// # Edge Cases
    /// - Square tensors: the diagonal is fixed at 0 (no self-preference)
    pub fn aggregate(criteria: &CriteriaSet, partial: &PartialPreferences) -> PreferenceMatrix {
        let weights = criteria.weights();
        let weight_sum = criteria.weight_sum();
        let square = partial.is_square();
        let (rows, columns) = (partial.row_count(), partial.column_count());

        let mut values = Vec::with_capacity(rows * columns);
        for i in 0..rows {
            for j in 0..columns {
                if square && i == j {
                    values.push(0.0);
                    continue;
                }
                let weighted: f64 = weights
                    .iter()
                    .enumerate()
                    .map(|(c, w)| w * partial.get(c, i, j))
                    .sum();
                values.push(weighted / weight_sum);
            }
        }

        PreferenceMatrix::from_parts(
            partial.row_ids().to_vec(),
            partial.column_ids().to_vec(),
            values,
        )
    }

    /// Computes preferences of every alternative over every other alternative.
    pub fn compute(criteria: &CriteriaSet, alternatives: &PerformanceTable) -> Preferences {
        let partial = Self::partial_preferences(criteria, alternatives, alternatives);
        let aggregated = Self::aggregate(criteria, &partial);
        debug!(
            alternatives = alternatives.row_count(),
            criteria = criteria.len(),
            "Computed alternative preferences"
        );
        Preferences {
            aggregated,
            partial,
        }
    }

    /// Computes preferences between alternatives and profiles, both directions.
    pub fn compute_with_profiles(
        criteria: &CriteriaSet,
        alternatives: &PerformanceTable,
        profiles: &PerformanceTable,
    ) -> ProfilePreferences {
        let forward = Self::partial_preferences(criteria, alternatives, profiles);
        let backward = Self::partial_preferences(criteria, profiles, alternatives);

        ProfilePreferences {
            alternatives_over_profiles: Preferences {
                aggregated: Self::aggregate(criteria, &forward),
                partial: forward,
            },
            profiles_over_alternatives: Preferences {
                aggregated: Self::aggregate(criteria, &backward),
                partial: backward,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{Criterion, Direction, GeneralizedCriterion};

    const EPS: f64 = 1e-12;

    fn criteria() -> CriteriaSet {
        CriteriaSet::new(vec![
            Criterion::new("price", 3.0, GeneralizedCriterion::v_shape(10.0).unwrap(), Direction::Min)
                .unwrap(),
            Criterion::new("quality", 1.0, GeneralizedCriterion::Usual, Direction::Max).unwrap(),
        ])
        .unwrap()
    }

    fn alternatives() -> PerformanceTable {
        PerformanceTable::builder()
            .criteria(vec!["price", "quality"])
            .row("a", vec![20.0, 5.0])
            .row("b", vec![25.0, 7.0])
            .row("c", vec![40.0, 7.0])
            .build()
            .unwrap()
    }

    #[test]
    fn partial_preferences_apply_direction_before_function() {
        let p = PreferenceCalculator::partial_preferences(&criteria(), &alternatives(), &alternatives());
        // a is 5 cheaper than b: v-shape 5/10
        assert!((p.get(0, 0, 1) - 0.5).abs() < EPS);
        assert_eq!(p.get(0, 1, 0), 0.0);
        // c is 20 dearer than a
        assert_eq!(p.get(0, 0, 2), 1.0);
        // quality is maximized with the usual function
        assert_eq!(p.get(1, 1, 0), 1.0);
        assert_eq!(p.get(1, 1, 2), 0.0);
    }

    #[test]
    fn aggregate_divides_by_weight_sum() {
        let prefs = PreferenceCalculator::compute(&criteria(), &alternatives());
        // π(a, b) = (3 * 0.5 + 1 * 0) / 4
        assert!((prefs.aggregated.index_of("a", "b").unwrap() - 0.375).abs() < EPS);
        // π(b, a) = (3 * 0 + 1 * 1) / 4
        assert!((prefs.aggregated.index_of("b", "a").unwrap() - 0.25).abs() < EPS);
    }

    #[test]
    fn aggregate_zeroes_the_diagonal() {
        let prefs = PreferenceCalculator::compute(&criteria(), &alternatives());
        for i in 0..3 {
            assert_eq!(prefs.aggregated.get(i, i), 0.0);
        }
    }

    #[test]
    fn profile_preferences_are_computed_in_both_directions() {
        let profiles = PerformanceTable::builder()
            .criteria(vec!["price", "quality"])
            .row("C1", vec![30.0, 6.0])
            .build()
            .unwrap();
        let prefs =
            PreferenceCalculator::compute_with_profiles(&criteria(), &alternatives(), &profiles);

        let forward = &prefs.alternatives_over_profiles;
        let backward = &prefs.profiles_over_alternatives;
        assert_eq!(forward.partial.row_ids(), alternatives().row_ids());
        assert_eq!(backward.partial.column_ids(), alternatives().row_ids());

        // a is 10 cheaper than C1 but worse on quality
        assert_eq!(forward.partial.get(0, 0, 0), 1.0);
        assert_eq!(backward.partial.get(1, 0, 0), 1.0);
        assert!((forward.aggregated.get(0, 0) - 0.75).abs() < EPS);
        assert!((backward.aggregated.get(0, 0) - 0.25).abs() < EPS);
    }
}
