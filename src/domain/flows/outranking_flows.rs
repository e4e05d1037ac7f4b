//! Outranking Flows - positive and negative flows from aggregated preferences.

use serde::{Deserialize, Serialize};

use super::NetFlows;
use crate::domain::preference::PreferenceMatrix;

/// Positive and negative outranking flows per entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutrankingFlows {
    entity_ids: Vec<String>,
    positive: Vec<f64>,
    negative: Vec<f64>,
}

impl OutrankingFlows {
    /// PROMETHEE I flows: raw row and column sums of a square matrix.
    ///
    /// The diagonal is skipped.
    pub fn promethee_i(preferences: &PreferenceMatrix) -> Self {
        let (positive, negative) = Self::sums(preferences);
        Self {
            entity_ids: preferences.row_ids().to_vec(),
            positive,
            negative,
        }
    }

    /// PROMETHEE II flows: row and column sums divided by `n - 1`.
    ///
    /// # Edge Cases
    /// - A single entity gets zero flows
    pub fn promethee_ii(preferences: &PreferenceMatrix) -> Self {
        let n = preferences.row_count();
        let (mut positive, mut negative) = Self::sums(preferences);
        if n > 1 {
            let divisor = (n - 1) as f64;
            positive.iter_mut().for_each(|v| *v /= divisor);
            negative.iter_mut().for_each(|v| *v /= divisor);
        }
        Self {
            entity_ids: preferences.row_ids().to_vec(),
            positive,
            negative,
        }
    }

    /// Flows of entities against a reference set (e.g. category profiles).
    ///
    /// Positive flow is the mean of `π(a, r)` over references, negative flow
    /// the mean of `π(r, a)`.
    pub fn against_profiles(forward: &PreferenceMatrix, backward: &PreferenceMatrix) -> Self {
        debug_assert_eq!(forward.row_ids(), backward.column_ids());

        let n = forward.row_count();
        let k = forward.column_count();
        let mean = |total: f64| if k > 0 { total / k as f64 } else { 0.0 };

        let positive = (0..n)
            .map(|a| mean((0..k).map(|r| forward.get(a, r)).sum()))
            .collect();
        let negative = (0..n)
            .map(|a| mean((0..k).map(|r| backward.get(r, a)).sum()))
            .collect();

        Self {
            entity_ids: forward.row_ids().to_vec(),
            positive,
            negative,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(entity_ids: Vec<String>, positive: Vec<f64>, negative: Vec<f64>) -> Self {
        Self {
            entity_ids,
            positive,
            negative,
        }
    }

    fn sums(preferences: &PreferenceMatrix) -> (Vec<f64>, Vec<f64>) {
        debug_assert!(preferences.is_square());
        let n = preferences.row_count();
        let positive = (0..n)
            .map(|i| (0..n).filter(|&j| j != i).map(|j| preferences.get(i, j)).sum())
            .collect();
        let negative = (0..n)
            .map(|i| (0..n).filter(|&j| j != i).map(|j| preferences.get(j, i)).sum())
            .collect();
        (positive, negative)
    }

    pub fn entity_ids(&self) -> &[String] {
        &self.entity_ids
    }

    pub fn positive(&self) -> &[f64] {
        &self.positive
    }

    pub fn negative(&self) -> &[f64] {
        &self.negative
    }

    /// Net outranking flow: positive minus negative.
    pub fn net(&self) -> NetFlows {
        NetFlows::from_parts(
            self.entity_ids.clone(),
            self.positive
                .iter()
                .zip(&self.negative)
                .map(|(p, n)| p - n)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{CriteriaSet, Criterion, Direction, GeneralizedCriterion};
    use crate::domain::flows::NetFlowCalculator;
    use crate::domain::preference::{PerformanceTable, PreferenceCalculator};

    const EPS: f64 = 1e-12;

    fn criteria() -> CriteriaSet {
        CriteriaSet::new(vec![
            Criterion::new("g1", 2.0, GeneralizedCriterion::v_shape(5.0).unwrap(), Direction::Max)
                .unwrap(),
            Criterion::new("g2", 1.0, GeneralizedCriterion::Usual, Direction::Min).unwrap(),
        ])
        .unwrap()
    }

    fn alternatives() -> PerformanceTable {
        PerformanceTable::builder()
            .criteria(vec!["g1", "g2"])
            .row("a1", vec![3.0, 4.0])
            .row("a2", vec![6.0, 1.0])
            .row("a3", vec![1.0, 2.0])
            .build()
            .unwrap()
    }

    #[test]
    fn promethee_ii_is_promethee_i_scaled() {
        let prefs = PreferenceCalculator::compute(&criteria(), &alternatives());
        let one = OutrankingFlows::promethee_i(&prefs.aggregated);
        let two = OutrankingFlows::promethee_ii(&prefs.aggregated);
        for i in 0..3 {
            assert!((one.positive()[i] / 2.0 - two.positive()[i]).abs() < EPS);
            assert!((one.negative()[i] / 2.0 - two.negative()[i]).abs() < EPS);
        }
    }

    #[test]
    fn promethee_ii_net_matches_weighted_criterion_flows() {
        let set = criteria();
        let prefs = PreferenceCalculator::compute(&set, &alternatives());
        let from_matrix = OutrankingFlows::promethee_ii(&prefs.aggregated).net();
        let from_criteria = NetFlowCalculator::aggregate_net_flows(
            &NetFlowCalculator::criteria_net_flows(&prefs.partial),
            &set,
        );
        for (a, b) in from_matrix.values().iter().zip(from_criteria.values()) {
            assert!((a - b).abs() < EPS);
        }
    }

    #[test]
    fn positive_flow_of_dominating_alternative() {
        let prefs = PreferenceCalculator::compute(&criteria(), &alternatives());
        let flows = OutrankingFlows::promethee_ii(&prefs.aggregated);
        // a2 is best on both criteria: its negative flow is zero
        assert_eq!(flows.negative()[1], 0.0);
        assert!(flows.positive()[1] > flows.positive()[0]);
    }

    #[test]
    fn against_profiles_averages_over_references() {
        let set = criteria();
        let profiles = PerformanceTable::builder()
            .criteria(vec!["g1", "g2"])
            .row("C1", vec![3.0, 4.0])
            .row("C2", vec![0.0, 9.0])
            .build()
            .unwrap();
        let prefs = PreferenceCalculator::compute_with_profiles(&set, &alternatives(), &profiles);
        let flows = OutrankingFlows::against_profiles(
            &prefs.alternatives_over_profiles.aggregated,
            &prefs.profiles_over_alternatives.aggregated,
        );
        // a1 equals C1 and beats C2 on g1 by 3 (0.6) and on g2
        let expected = (0.0 + (2.0 * 0.6 + 1.0) / 3.0) / 2.0;
        assert!((flows.positive()[0] - expected).abs() < EPS);
        assert_eq!(flows.negative()[0], 0.0);
    }
}
