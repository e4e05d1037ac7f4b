//! ProfileSeeder port for choosing the initial category profiles.

use crate::domain::clustering::ConfigurationError;

/// Source of the alternatives that seed the category profiles.
///
/// Implementations may be random (seedable for reproducibility) or fixed.
/// The engine checks the returned indices; a seeder only reports failures it
/// can detect itself.
pub trait ProfileSeeder {
    /// Picks `n_categories` distinct row indices out of `0..n_alternatives`.
    ///
    /// Index `i` of the result seeds category `C{i+1}`.
    fn select(
        &mut self,
        n_alternatives: usize,
        n_categories: usize,
    ) -> Result<Vec<usize>, ConfigurationError>;
}

impl<S: ProfileSeeder + ?Sized> ProfileSeeder for Box<S> {
    fn select(
        &mut self,
        n_alternatives: usize,
        n_categories: usize,
    ) -> Result<Vec<usize>, ConfigurationError> {
        (**self).select(n_alternatives, n_categories)
    }
}
