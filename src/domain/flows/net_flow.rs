//! Net Flow Calculator - single-criterion and aggregate net flows.

use serde::{Deserialize, Serialize};

use crate::domain::criteria::CriteriaSet;
use crate::domain::preference::PartialPreferences;

/// Net flow of every entity on every criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaNetFlows {
    entity_ids: Vec<String>,
    criterion_ids: Vec<String>,
    values: Vec<f64>,
}

impl CriteriaNetFlows {
    pub fn entity_ids(&self) -> &[String] {
        &self.entity_ids
    }

    pub fn criterion_ids(&self) -> &[String] {
        &self.criterion_ids
    }

    pub fn entity_count(&self) -> usize {
        self.entity_ids.len()
    }

    /// Net flow of entity `i` on criterion `c`.
    pub fn get(&self, i: usize, c: usize) -> f64 {
        self.values[i * self.criterion_ids.len() + c]
    }

    /// All criterion flows of entity `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        let width = self.criterion_ids.len();
        &self.values[i * width..(i + 1) * width]
    }
}

/// One aggregate net flow per entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetFlows {
    entity_ids: Vec<String>,
    values: Vec<f64>,
}

impl NetFlows {
    pub(crate) fn from_parts(entity_ids: Vec<String>, values: Vec<f64>) -> Self {
        Self { entity_ids, values }
    }

    pub fn entity_ids(&self) -> &[String] {
        &self.entity_ids
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Net flow of a named entity.
    pub fn get(&self, entity_id: &str) -> Option<f64> {
        let i = self.entity_ids.iter().position(|e| e == entity_id)?;
        Some(self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entity_ids
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Sum over all entities; zero up to rounding for a closed comparison set.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Net flow computations over partial preference tensors.
pub struct NetFlowCalculator;

impl NetFlowCalculator {
    /// Single-criterion net flows of entities compared among themselves.
    ///
    /// # Algorithm
    /// `φ_c(i) = 1/(n-1) · Σ_{j≠i} [P_c(i, j) - P_c(j, i)]`
    ///
    /// # Edge Cases
    /// - A single entity has no comparison partner: all its flows are 0
    pub fn criteria_net_flows(partial: &PartialPreferences) -> CriteriaNetFlows {
        debug_assert!(partial.is_square());

        let n = partial.row_count();
        let m = partial.criterion_count();
        let mut values = vec![0.0; n * m];

        if n > 1 {
            let divisor = (n - 1) as f64;
            for i in 0..n {
                for c in 0..m {
                    let balance: f64 = (0..n)
                        .filter(|&j| j != i)
                        .map(|j| partial.get(c, i, j) - partial.get(c, j, i))
                        .sum();
                    values[i * m + c] = balance / divisor;
                }
            }
        }

        CriteriaNetFlows {
            entity_ids: partial.row_ids().to_vec(),
            criterion_ids: partial.criterion_ids().to_vec(),
            values,
        }
    }

    /// Single-criterion net flows of entities against a reference set.
    ///
    /// `forward` holds entities over references and `backward` references
    /// over entities (as produced by
    /// [`PreferenceCalculator::compute_with_profiles`](crate::domain::preference::PreferenceCalculator::compute_with_profiles)).
    ///
    /// # Algorithm
    /// `φ_c(a) = 1/|R| · Σ_{r∈R} [P_c(a, r) - P_c(r, a)]`
    pub fn criteria_net_flows_against(
        forward: &PartialPreferences,
        backward: &PartialPreferences,
    ) -> CriteriaNetFlows {
        debug_assert_eq!(forward.row_ids(), backward.column_ids());
        debug_assert_eq!(forward.column_ids(), backward.row_ids());

        let n = forward.row_count();
        let k = forward.column_count();
        let m = forward.criterion_count();
        let mut values = vec![0.0; n * m];

        if k > 0 {
            for a in 0..n {
                for c in 0..m {
                    let balance: f64 = (0..k)
                        .map(|r| forward.get(c, a, r) - backward.get(c, r, a))
                        .sum();
                    values[a * m + c] = balance / k as f64;
                }
            }
        }

        CriteriaNetFlows {
            entity_ids: forward.row_ids().to_vec(),
            criterion_ids: forward.criterion_ids().to_vec(),
            values,
        }
    }

    /// Aggregate net flow per entity.
    ///
    /// # Algorithm
    /// `φ(i) = Σ_c w̄_c · φ_c(i)` with weights normalised to sum to one, so the
    /// result equals the PROMETHEE II net flow `φ⁺(i) - φ⁻(i)`.
    pub fn aggregate_net_flows(flows: &CriteriaNetFlows, criteria: &CriteriaSet) -> NetFlows {
        debug_assert_eq!(flows.criterion_ids(), criteria.names().as_slice());

        let weights = criteria.normalized_weights();
        let values = (0..flows.entity_count())
            .map(|i| {
                flows
                    .row(i)
                    .iter()
                    .zip(&weights)
                    .map(|(phi, w)| phi * w)
                    .sum()
            })
            .collect();

        NetFlows::from_parts(flows.entity_ids().to_vec(), values)
    }
}
