//! Sorting Module - assignment of alternatives to ordered categories.
//!
//! # Components
//!
//! - `CategoryLabel` / `Assignment` - the category vocabulary
//! - `PrometheeTri` - closest-profile assignment in net flow space

mod assignment;
mod promethee_tri;

pub use assignment::{Assignment, CategoryLabel};
pub use promethee_tri::{PrometheeTri, TriOptions};
