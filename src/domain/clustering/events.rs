//! Clustering domain events.
//!
//! Published when a clustering run converges. The payload summarises the
//! grouping rather than carrying preference tensors.

use serde::{Deserialize, Serialize};

use super::ClusterResult;
use crate::domain::foundation::{RunId, Timestamp};
use crate::domain::sorting::CategoryLabel;

/// Size and members of one group in a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub category: CategoryLabel,
    pub size: usize,
    pub members: Vec<String>,
}

/// Published when a clustering run reaches a stable assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringCompleted {
    /// The run this event reports on.
    pub run_id: RunId,
    /// Number of categories requested.
    pub n_categories: usize,
    /// Iterations until the assignment repeated.
    pub iterations: usize,
    /// Non-empty groups, smallest first.
    pub groups: Vec<GroupSummary>,
    /// Categories left empty at some iteration.
    pub degenerate_categories: Vec<CategoryLabel>,
    /// When the run converged.
    pub completed_at: Timestamp,
}

impl ClusteringCompleted {
    pub const EVENT_TYPE: &'static str = "clustering.completed";

    pub fn from_result(run_id: RunId, result: &ClusterResult) -> Self {
        let mut degenerate_categories: Vec<CategoryLabel> = Vec::new();
        for warning in result.warnings() {
            if !degenerate_categories.contains(&warning.category) {
                degenerate_categories.push(warning.category.clone());
            }
        }

        Self {
            run_id,
            n_categories: result.profiles().row_count(),
            iterations: result.iterations(),
            groups: result
                .groups()
                .iter()
                .map(|g| GroupSummary {
                    category: g.category.clone(),
                    size: g.len(),
                    members: g.members.clone(),
                })
                .collect(),
            degenerate_categories,
            completed_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clustering::DegenerateCategory;
    use crate::domain::preference::PerformanceTable;
    use crate::domain::sorting::Assignment;

    fn result() -> ClusterResult {
        let assignment = Assignment::new(vec![
            ("A".into(), CategoryLabel::new("C1")),
            ("B".into(), CategoryLabel::new("C1")),
            ("C".into(), CategoryLabel::new("C2")),
        ]);
        let profiles = PerformanceTable::builder()
            .criteria(vec!["g1"])
            .row("C1", vec![1.0])
            .row("C2", vec![2.0])
            .row("C3", vec![3.0])
            .build()
            .unwrap();
        let warnings = vec![
            DegenerateCategory {
                category: CategoryLabel::new("C3"),
                iteration: 1,
            },
            DegenerateCategory {
                category: CategoryLabel::new("C3"),
                iteration: 2,
            },
        ];
        ClusterResult::new(assignment, profiles, 3, warnings)
    }

    #[test]
    fn from_result_summarises_groups() {
        let event = ClusteringCompleted::from_result(RunId::new(), &result());
        assert_eq!(event.n_categories, 3);
        assert_eq!(event.iterations, 3);
        assert_eq!(event.groups[0].size, 1);
        assert_eq!(event.groups[1].members, vec!["A", "B"]);
    }

    #[test]
    fn degenerate_categories_are_listed_once() {
        let event = ClusteringCompleted::from_result(RunId::new(), &result());
        assert_eq!(event.degenerate_categories, vec![CategoryLabel::new("C3")]);
    }

    #[test]
    fn serializes_with_flat_labels() {
        let event = ClusteringCompleted::from_result(RunId::new(), &result());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["groups"][0]["category"], "C2");
        assert_eq!(json["degenerate_categories"][0], "C3");
        assert!(json["run_id"].is_string());
    }
}
