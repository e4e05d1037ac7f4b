//! Clustering result types.

use serde::{Deserialize, Serialize};

use crate::domain::preference::PerformanceTable;
use crate::domain::sorting::{Assignment, CategoryLabel};

/// Alternatives sharing one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterGroup {
    pub category: CategoryLabel,
    /// Member names in input order.
    pub members: Vec<String>,
}

impl ClusterGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, alternative_id: &str) -> bool {
        self.members.iter().any(|m| m == alternative_id)
    }
}

/// A category that received no alternative during an iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegenerateCategory {
    pub category: CategoryLabel,
    pub iteration: usize,
}

/// Outcome of a converged clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    groups: Vec<ClusterGroup>,
    assignment: Assignment,
    profiles: PerformanceTable,
    iterations: usize,
    warnings: Vec<DegenerateCategory>,
}

impl ClusterResult {
    /// Groups the final assignment.
    ///
    /// Groups appear in order of their first member, then are stably sorted
    /// by ascending size. Categories without members produce no group.
    pub(crate) fn new(
        assignment: Assignment,
        profiles: PerformanceTable,
        iterations: usize,
        warnings: Vec<DegenerateCategory>,
    ) -> Self {
        let mut groups: Vec<ClusterGroup> = Vec::new();
        for (alternative, category) in assignment.iter() {
            match groups.iter_mut().find(|g| &g.category == category) {
                Some(group) => group.members.push(alternative.to_string()),
                None => groups.push(ClusterGroup {
                    category: category.clone(),
                    members: vec![alternative.to_string()],
                }),
            }
        }
        groups.sort_by_key(ClusterGroup::len);

        Self {
            groups,
            assignment,
            profiles,
            iterations,
            warnings,
        }
    }

    /// Non-empty groups, smallest first.
    pub fn groups(&self) -> &[ClusterGroup] {
        &self.groups
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Final category profiles, one row per category label.
    pub fn profiles(&self) -> &PerformanceTable {
        &self.profiles
    }

    /// Iterations run, including the one that confirmed the assignment.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn warnings(&self) -> &[DegenerateCategory] {
        &self.warnings
    }

    /// Group holding an alternative.
    pub fn group_of(&self, alternative_id: &str) -> Option<&ClusterGroup> {
        self.groups.iter().find(|g| g.contains(alternative_id))
    }

    /// Member lists without labels, smallest group first.
    pub fn member_sets(&self) -> Vec<Vec<String>> {
        self.groups.iter().map(|g| g.members.clone()).collect()
    }
}
