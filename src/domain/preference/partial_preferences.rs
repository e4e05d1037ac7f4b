//! Partial preference tensors and aggregated preference matrices.

use serde::{Deserialize, Serialize};

/// Per-criterion preference degrees of row entities over column entities.
///
/// Entry `(c, i, j)` is the degree to which row `i` is preferred to
/// column `j` on criterion `c`, always in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialPreferences {
    criterion_ids: Vec<String>,
    row_ids: Vec<String>,
    column_ids: Vec<String>,
    values: Vec<f64>,
}

impl PartialPreferences {
    pub(crate) fn from_parts(
        criterion_ids: Vec<String>,
        row_ids: Vec<String>,
        column_ids: Vec<String>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(
            values.len(),
            criterion_ids.len() * row_ids.len() * column_ids.len()
        );
        Self {
            criterion_ids,
            row_ids,
            column_ids,
            values,
        }
    }

    pub fn criterion_ids(&self) -> &[String] {
        &self.criterion_ids
    }

    pub fn row_ids(&self) -> &[String] {
        &self.row_ids
    }

    pub fn column_ids(&self) -> &[String] {
        &self.column_ids
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_ids.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_ids.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_ids.len()
    }

    /// True when rows and columns are the same entities in the same order.
    pub fn is_square(&self) -> bool {
        self.row_ids == self.column_ids
    }

    /// Degree of row `i` over column `j` on criterion `c`.
    pub fn get(&self, c: usize, i: usize, j: usize) -> f64 {
        let (rows, columns) = (self.row_ids.len(), self.column_ids.len());
        self.values[(c * rows + i) * columns + j]
    }

    /// All degrees, criterion-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Aggregated preference indices of row entities over column entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceMatrix {
    row_ids: Vec<String>,
    column_ids: Vec<String>,
    values: Vec<f64>,
}

impl PreferenceMatrix {
    pub(crate) fn from_parts(row_ids: Vec<String>, column_ids: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), row_ids.len() * column_ids.len());
        Self {
            row_ids,
            column_ids,
            values,
        }
    }

    pub fn row_ids(&self) -> &[String] {
        &self.row_ids
    }

    pub fn column_ids(&self) -> &[String] {
        &self.column_ids
    }

    pub fn row_count(&self) -> usize {
        self.row_ids.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_ids.len()
    }

    pub fn is_square(&self) -> bool {
        self.row_ids == self.column_ids
    }

    /// Index of row `i` over column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.column_ids.len() + j]
    }

    /// Looks an index up by identifiers.
    pub fn index_of(&self, row_id: &str, column_id: &str) -> Option<f64> {
        let i = self.row_ids.iter().position(|r| r == row_id)?;
        let j = self.column_ids.iter().position(|c| c == column_id)?;
        Some(self.get(i, j))
    }
}
