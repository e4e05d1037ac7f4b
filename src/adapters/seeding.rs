//! Profile seeders: random sampling and fixed indices.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::clustering::ConfigurationError;
use crate::ports::ProfileSeeder;

/// Samples distinct alternatives without replacement.
#[derive(Debug, Clone)]
pub struct RandomSampleSeeder<R = ChaCha8Rng> {
    rng: R,
}

impl RandomSampleSeeder<ChaCha8Rng> {
    /// Deterministic seeder: the same seed always draws the same profiles.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomSampleSeeder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ProfileSeeder for RandomSampleSeeder<R> {
    fn select(
        &mut self,
        n_alternatives: usize,
        n_categories: usize,
    ) -> Result<Vec<usize>, ConfigurationError> {
        if n_categories > n_alternatives {
            return Err(ConfigurationError::invalid_seed(format!(
                "cannot sample {} of {} alternatives",
                n_categories, n_alternatives
            )));
        }
        Ok(index::sample(&mut self.rng, n_alternatives, n_categories).into_vec())
    }
}

/// Always returns the same indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSeeder {
    indices: Vec<usize>,
}

impl FixedSeeder {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

impl ProfileSeeder for FixedSeeder {
    fn select(
        &mut self,
        _n_alternatives: usize,
        n_categories: usize,
    ) -> Result<Vec<usize>, ConfigurationError> {
        if self.indices.len() != n_categories {
            return Err(ConfigurationError::invalid_seed(format!(
                "{} fixed indices for {} categories",
                self.indices.len(),
                n_categories
            )));
        }
        Ok(self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_seed_draws_same_indices() {
        let a = RandomSampleSeeder::from_seed(42).select(10, 3).unwrap();
        let b = RandomSampleSeeder::from_seed(42).select(10, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_indices_are_distinct_and_in_range() {
        let mut seeder = RandomSampleSeeder::from_seed(7);
        for _ in 0..20 {
            let picked = seeder.select(6, 4).unwrap();
            assert_eq!(picked.len(), 4);
            assert!(picked.iter().all(|&i| i < 6));
            assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 4);
        }
    }

    #[test]
    fn random_seeder_rejects_oversized_sample() {
        let err = RandomSampleSeeder::from_seed(1).select(2, 3).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidSeed { .. }));
    }

    #[test]
    fn fixed_seeder_returns_its_indices() {
        assert_eq!(FixedSeeder::new(vec![3, 0]).select(4, 2).unwrap(), vec![3, 0]);
    }

    #[test]
    fn fixed_seeder_rejects_wrong_count() {
        assert!(FixedSeeder::new(vec![0]).select(4, 2).is_err());
    }
}
