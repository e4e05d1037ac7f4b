//! Category labels and alternative-to-category assignments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of an ordered category, `C1` being the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Label of the category at a zero-based position: `C1`, `C2`, ...
    pub fn nth(index: usize) -> Self {
        Self(format!("C{}", index + 1))
    }

    /// Labels `C1..Ck`.
    pub fn sequence(k: usize) -> Vec<Self> {
        (0..k).map(Self::nth).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CategoryLabel> for String {
    fn from(label: CategoryLabel) -> Self {
        label.0
    }
}

/// Total mapping from alternatives to categories, in alternative order.
///
/// Two assignments are equal when they cover the same alternatives in the
/// same order and put each one in the same category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    entries: Vec<(String, CategoryLabel)>,
}

impl Assignment {
    pub fn new(entries: Vec<(String, CategoryLabel)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category of an alternative.
    pub fn category_of(&self, alternative_id: &str) -> Option<&CategoryLabel> {
        self.entries
            .iter()
            .find(|(id, _)| id == alternative_id)
            .map(|(_, category)| category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryLabel)> {
        self.entries.iter().map(|(id, c)| (id.as_str(), c))
    }

    /// Alternatives assigned to a category, in alternative order.
    pub fn members_of(&self, category: &CategoryLabel) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, c)| c == category)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Positions (in alternative order) of the members of a category.
    pub fn member_indices(&self, category: &CategoryLabel) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, (_, c))| c == category)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment() -> Assignment {
        Assignment::new(vec![
            ("a".to_string(), CategoryLabel::nth(1)),
            ("b".to_string(), CategoryLabel::nth(0)),
            ("c".to_string(), CategoryLabel::nth(1)),
        ])
    }

    #[test]
    fn labels_are_one_based() {
        assert_eq!(CategoryLabel::nth(0).as_str(), "C1");
        let labels: Vec<String> = CategoryLabel::sequence(3).into_iter().map(String::from).collect();
        assert_eq!(labels, vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn members_of_keeps_alternative_order() {
        assert_eq!(assignment().members_of(&CategoryLabel::new("C2")), vec!["a", "c"]);
        assert_eq!(assignment().member_indices(&CategoryLabel::new("C2")), vec![0, 2]);
        assert!(assignment().members_of(&CategoryLabel::new("C3")).is_empty());
    }

    #[test]
    fn category_of_looks_up_by_name() {
        assert_eq!(assignment().category_of("b"), Some(&CategoryLabel::new("C1")));
        assert_eq!(assignment().category_of("z"), None);
    }

    #[test]
    fn equality_requires_same_category_per_alternative() {
        let mut other = assignment();
        assert_eq!(assignment(), other);
        other.entries[0].1 = CategoryLabel::nth(0);
        assert_ne!(assignment(), other);
    }
}
