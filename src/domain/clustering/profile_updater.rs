//! Profile Updater - moves each category profile to the median of its members.

use crate::domain::preference::PerformanceTable;
use crate::domain::sorting::{Assignment, CategoryLabel};

/// New profiles and the categories that received no alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub profiles: PerformanceTable,
    pub empty_categories: Vec<CategoryLabel>,
}

/// Median profile update.
pub struct ProfileUpdater;

impl ProfileUpdater {
    /// Recomputes every profile from the alternatives assigned to it.
    ///
    /// Profile rows are identified by their category label; `alternatives`
    /// rows must follow the assignment order.
    ///
    /// # Edge Cases
    /// - A category with no members keeps its previous profile and is
    ///   listed in `empty_categories`
    pub fn update(
        profiles: &PerformanceTable,
        alternatives: &PerformanceTable,
        assignment: &Assignment,
    ) -> ProfileUpdate {
        debug_assert_eq!(alternatives.row_count(), assignment.len());

        let mut next = profiles.clone();
        let mut empty_categories = Vec::new();

        for (row, label) in profiles.row_ids().iter().enumerate() {
            let category = CategoryLabel::new(label.clone());
            let members = assignment.member_indices(&category);
            if members.is_empty() {
                empty_categories.push(category);
                continue;
            }

            let medians: Vec<f64> = (0..alternatives.criterion_count())
                .map(|c| {
                    let mut column: Vec<f64> =
                        members.iter().map(|&m| alternatives.value(m, c)).collect();
                    median(&mut column).unwrap_or_else(|| profiles.value(row, c))
                })
                .collect();
            next = next.with_row(row, &medians);
        }

        ProfileUpdate {
            profiles: next,
            empty_categories,
        }
    }
}

/// Median of a sample; the mean of the two middle values for even sizes.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
