//! Criterion and criteria set value objects.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::GeneralizedCriterion;
use crate::domain::foundation::{ensure_non_negative, ValidationError};

/// Direction of preference on a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Max,
    Min,
}

impl Direction {
    /// Orients a raw difference `g(a) - g(b)` so that positive means "a is better".
    pub fn orient(&self, difference: f64) -> f64 {
        match self {
            Direction::Max => difference,
            Direction::Min => -difference,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Max => "max",
            Direction::Min => "min",
        };
        write!(f, "{}", s)
    }
}

/// A single evaluation dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    name: String,
    weight: f64,
    function: GeneralizedCriterion,
    direction: Direction,
}

impl Criterion {
    /// Creates a validated criterion.
    ///
    /// # Errors
    /// - Empty name
    /// - Negative or non-finite weight
    /// - Inconsistent thresholds on `function`
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        function: GeneralizedCriterion,
        direction: Direction,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion.name"));
        }
        ensure_non_negative("criterion.weight", weight)?;
        function.validate()?;
        Ok(Self {
            name,
            weight,
            function,
            direction,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn function(&self) -> &GeneralizedCriterion {
        &self.function
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Preference degree of `a` over `b` on this criterion.
    pub fn preference(&self, a: f64, b: f64) -> f64 {
        self.function.preference(self.direction.orient(a - b))
    }
}

/// Ordered collection of criteria with unique names and a positive weight sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    /// Creates a criteria set.
    ///
    /// # Errors
    /// - No criteria
    /// - Duplicate criterion names
    /// - All weights zero
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, ValidationError> {
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }

        let mut seen = HashSet::new();
        for criterion in &criteria {
            if !seen.insert(criterion.name()) {
                return Err(ValidationError::duplicate("criteria", criterion.name()));
            }
        }

        let weight_sum: f64 = criteria.iter().map(Criterion::weight).sum();
        if weight_sum <= 0.0 {
            return Err(ValidationError::out_of_range(
                "criteria.weight_sum",
                f64::MIN_POSITIVE,
                f64::INFINITY,
                weight_sum,
            ));
        }

        Ok(Self { criteria })
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Returns the criterion at a position.
    pub fn get(&self, index: usize) -> Option<&Criterion> {
        self.criteria.get(index)
    }

    /// Returns the criterion names in order.
    pub fn names(&self) -> Vec<String> {
        self.criteria.iter().map(|c| c.name.clone()).collect()
    }

    /// Returns the weights in order.
    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(Criterion::weight).collect()
    }

    pub fn weight_sum(&self) -> f64 {
        self.criteria.iter().map(Criterion::weight).sum()
    }

    /// Returns the weights scaled to sum to one.
    pub fn normalized_weights(&self) -> Vec<f64> {
        let sum = self.weight_sum();
        self.criteria.iter().map(|c| c.weight / sum).collect()
    }

    /// Returns a copy without the named criterion.
    ///
    /// # Errors
    /// Fails when the remaining set would be invalid (empty or zero weight).
    pub fn without(&self, name: &str) -> Result<Self, ValidationError> {
        Self::new(
            self.criteria
                .iter()
                .filter(|c| c.name != name)
                .cloned()
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a CriteriaSet {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}
