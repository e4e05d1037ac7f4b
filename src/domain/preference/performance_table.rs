//! Performance Table - labeled matrix of entity performances on criteria.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::domain::criteria::CriteriaSet;
use crate::domain::foundation::{ensure_finite, ValidationError};

/// The table columns and the criteria set name different criteria.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("criteria mismatch: missing columns {missing:?}, unexpected columns {unexpected:?}")]
pub struct CriteriaMismatch {
    /// Criteria with no matching column.
    pub missing: Vec<String>,
    /// Columns with no matching criterion.
    pub unexpected: Vec<String>,
}

/// Rows are alternatives or profiles, columns are criteria.
///
/// Values are stored row-major; the identifier lists fix the index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTable {
    row_ids: Vec<String>,
    criterion_ids: Vec<String>,
    values: Vec<f64>,
}

impl PerformanceTable {
    /// Creates a table from row identifiers, criterion identifiers and rows.
    ///
    /// # Errors
    /// - Duplicate or empty row / criterion identifiers
    /// - A row whose length differs from the criterion count
    /// - Non-finite values
    pub fn new(
        row_ids: Vec<String>,
        criterion_ids: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, ValidationError> {
        ensure_unique("rows", &row_ids)?;
        ensure_unique("criteria", &criterion_ids)?;

        if rows.len() != row_ids.len() {
            return Err(ValidationError::invalid_format(
                "rows",
                format!("{} identifiers but {} rows", row_ids.len(), rows.len()),
            ));
        }

        let mut values = Vec::with_capacity(row_ids.len() * criterion_ids.len());
        for (row_id, row) in row_ids.iter().zip(rows) {
            if row.len() != criterion_ids.len() {
                return Err(ValidationError::invalid_format(
                    row_id.clone(),
                    format!("expected {} values, got {}", criterion_ids.len(), row.len()),
                ));
            }
            for value in row {
                values.push(ensure_finite(row_id, value)?);
            }
        }

        Ok(Self {
            row_ids,
            criterion_ids,
            values,
        })
    }

    /// Creates a builder for constructing a performance table.
    pub fn builder() -> PerformanceTableBuilder {
        PerformanceTableBuilder::new()
    }

    /// Builds a table from already-checked parts.
    pub(crate) fn from_parts(
        row_ids: Vec<String>,
        criterion_ids: Vec<String>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(values.len(), row_ids.len() * criterion_ids.len());
        Self {
            row_ids,
            criterion_ids,
            values,
        }
    }

    pub fn row_ids(&self) -> &[String] {
        &self.row_ids
    }

    pub fn criterion_ids(&self) -> &[String] {
        &self.criterion_ids
    }

    pub fn row_count(&self) -> usize {
        self.row_ids.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ids.is_empty()
    }

    /// Value at a row and column position.
    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.values[row * self.criterion_ids.len() + column]
    }

    /// Performance vector of one row.
    pub fn row(&self, row: usize) -> &[f64] {
        let width = self.criterion_ids.len();
        &self.values[row * width..(row + 1) * width]
    }

    /// Looks a value up by identifiers.
    pub fn get(&self, row_id: &str, criterion_id: &str) -> Option<f64> {
        let row = self.row_index(row_id)?;
        let column = self.criterion_ids.iter().position(|c| c == criterion_id)?;
        Some(self.value(row, column))
    }

    pub fn row_index(&self, row_id: &str) -> Option<usize> {
        self.row_ids.iter().position(|r| r == row_id)
    }

    /// Reorders the columns to follow the criteria set.
    ///
    /// The column set must equal the criterion name set exactly.
    pub fn aligned_to(&self, criteria: &CriteriaSet) -> Result<Self, CriteriaMismatch> {
        let names = criteria.names();
        let positions: HashMap<&str, usize> = self
            .criterion_ids
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();

        let missing: Vec<String> = names
            .iter()
            .filter(|n| !positions.contains_key(n.as_str()))
            .cloned()
            .collect();
        let expected: HashSet<&str> = names.iter().map(String::as_str).collect();
        let unexpected: Vec<String> = self
            .criterion_ids
            .iter()
            .filter(|c| !expected.contains(c.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(CriteriaMismatch {
                missing,
                unexpected,
            });
        }

        let order: Vec<usize> = names.iter().map(|n| positions[n.as_str()]).collect();
        let mut values = Vec::with_capacity(self.values.len());
        for row in 0..self.row_count() {
            values.extend(order.iter().map(|&column| self.value(row, column)));
        }

        Ok(Self::from_parts(self.row_ids.clone(), names, values))
    }

    /// Copies the selected rows under new identifiers.
    ///
    /// `indices` and `row_ids` are paired positionally.
    pub fn select_rows(&self, indices: &[usize], row_ids: Vec<String>) -> Self {
        debug_assert_eq!(indices.len(), row_ids.len());
        let values = indices
            .iter()
            .flat_map(|&i| self.row(i).iter().copied())
            .collect();
        Self::from_parts(row_ids, self.criterion_ids.clone(), values)
    }

    /// Returns a copy with one row's values replaced.
    pub(crate) fn with_row(&self, row: usize, values: &[f64]) -> Self {
        let mut next = self.clone();
        let width = next.criterion_ids.len();
        next.values[row * width..(row + 1) * width].copy_from_slice(values);
        next
    }

    /// Returns a copy without the named column.
    pub fn without_criterion(&self, criterion_id: &str) -> Self {
        let keep: Vec<usize> = (0..self.criterion_count())
            .filter(|&c| self.criterion_ids[c] != criterion_id)
            .collect();
        let criterion_ids = keep.iter().map(|&c| self.criterion_ids[c].clone()).collect();
        let mut values = Vec::with_capacity(self.row_count() * keep.len());
        for row in 0..self.row_count() {
            values.extend(keep.iter().map(|&c| self.value(row, c)));
        }
        Self::from_parts(self.row_ids.clone(), criterion_ids, values)
    }
}

fn ensure_unique(field: &str, ids: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        if !seen.insert(id.as_str()) {
            return Err(ValidationError::duplicate(field, id.clone()));
        }
    }
    Ok(())
}

/// Builder for constructing PerformanceTable instances.
#[derive(Debug, Default)]
pub struct PerformanceTableBuilder {
    row_ids: Vec<String>,
    criterion_ids: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl PerformanceTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criteria (columns).
    pub fn criteria(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.criterion_ids = ids.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds a row.
    pub fn row(mut self, id: impl Into<String>, values: Vec<f64>) -> Self {
        self.row_ids.push(id.into());
        self.rows.push(values);
        self
    }

    /// Builds and validates the table.
    pub fn build(self) -> Result<PerformanceTable, ValidationError> {
        PerformanceTable::new(self.row_ids, self.criterion_ids, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{Criterion, Direction, GeneralizedCriterion};

    fn table() -> PerformanceTable {
        PerformanceTable::builder()
            .criteria(vec!["g1", "g2"])
            .row("A", vec![10.0, 1.0])
            .row("B", vec![8.0, 2.0])
            .build()
            .unwrap()
    }

    fn criteria(names: &[&str]) -> CriteriaSet {
        CriteriaSet::new(
            names
                .iter()
                .map(|n| {
                    Criterion::new(*n, 1.0, GeneralizedCriterion::Usual, Direction::Max).unwrap()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn builder_produces_row_major_values() {
        let t = table();
        assert_eq!(t.row(1), &[8.0, 2.0]);
        assert_eq!(t.get("A", "g2"), Some(1.0));
        assert_eq!(t.get("C", "g2"), None);
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let result = PerformanceTable::builder()
            .criteria(vec!["g1", "g2"])
            .row("A", vec![1.0])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_duplicate_rows() {
        let result = PerformanceTable::builder()
            .criteria(vec!["g1"])
            .row("A", vec![1.0])
            .row("A", vec![2.0])
            .build();
        assert!(matches!(result, Err(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn new_rejects_nan() {
        let result = PerformanceTable::builder()
            .criteria(vec!["g1"])
            .row("A", vec![f64::NAN])
            .build();
        assert!(matches!(result, Err(ValidationError::NonFinite { .. })));
    }

    #[test]
    fn aligned_to_reorders_columns() {
        let aligned = table().aligned_to(&criteria(&["g2", "g1"])).unwrap();
        assert_eq!(aligned.criterion_ids(), &["g2".to_string(), "g1".to_string()]);
        assert_eq!(aligned.row(0), &[1.0, 10.0]);
    }

    #[test]
    fn aligned_to_reports_both_sides_of_mismatch() {
        let err = table().aligned_to(&criteria(&["g1", "g3"])).unwrap_err();
        assert_eq!(err.missing, vec!["g3".to_string()]);
        assert_eq!(err.unexpected, vec!["g2".to_string()]);
    }

    #[test]
    fn select_rows_relabels_in_given_order() {
        let profiles = table().select_rows(&[1, 0], vec!["C1".into(), "C2".into()]);
        assert_eq!(profiles.row_ids(), &["C1".to_string(), "C2".to_string()]);
        assert_eq!(profiles.row(0), &[8.0, 2.0]);
    }

    #[test]
    fn without_criterion_drops_column() {
        let t = table().without_criterion("g1");
        assert_eq!(t.criterion_count(), 1);
        assert_eq!(t.row(0), &[1.0]);
    }
}
