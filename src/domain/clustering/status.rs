//! ClusterStatus enum for tracking the lifecycle of a clustering run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClusterStatus {
    #[default]
    Initialized,
    Iterating,
    Converged,
}

impl StateMachine for ClusterStatus {
    /// Valid transitions:
    /// - Initialized -> Iterating
    /// - Iterating -> Iterating
    /// - Iterating -> Converged
    fn can_transition_to(&self, target: &Self) -> bool {
        use ClusterStatus::*;
        matches!(
            (self, target),
            (Initialized, Iterating) | (Iterating, Iterating) | (Iterating, Converged)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ClusterStatus::*;
        match self {
            Initialized => vec![Iterating],
            Iterating => vec![Iterating, Converged],
            Converged => vec![],
        }
    }
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClusterStatus::Initialized => "Initialized",
            ClusterStatus::Iterating => "Iterating",
            ClusterStatus::Converged => "Converged",
        };
        write!(f, "{}", s)
    }
}
