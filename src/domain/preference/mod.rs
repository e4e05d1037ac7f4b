//! Preference Module - pairwise comparison of alternatives and profiles.
//!
//! # Components
//!
//! - `PerformanceTable` - labeled matrix of performances (rows × criteria)
//! - `PartialPreferences` - per-criterion preference degrees for every ordered pair
//! - `PreferenceMatrix` - weighted aggregation of the partial degrees
//! - `PreferenceCalculator` - builds both from a table and a criteria set

mod calculator;
mod partial_preferences;
mod performance_table;

pub use calculator::{PreferenceCalculator, Preferences, ProfilePreferences};
pub use partial_preferences::{PartialPreferences, PreferenceMatrix};
pub use performance_table::{CriteriaMismatch, PerformanceTable, PerformanceTableBuilder};
