//! Criteria - evaluation dimensions and their generalized criterion functions.

mod criterion;
mod generalized_criterion;

pub use criterion::{CriteriaSet, Criterion, Direction};
pub use generalized_criterion::{GeneralizedCriterion, PreferenceFunction};
