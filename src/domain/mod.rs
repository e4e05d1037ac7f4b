//! Domain layer containing the PROMETHEE model and the clustering loop.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `criteria` - Generalized criterion functions, criteria and weights
//! - `preference` - Performance tables and pairwise preference tensors
//! - `flows` - Net flows, PROMETHEE I / II flows and ranking
//! - `sorting` - PrometheeTri assignment to ordered categories
//! - `clustering` - Profile updates, convergence loop and results

pub mod clustering;
pub mod criteria;
pub mod flows;
pub mod foundation;
pub mod preference;
pub mod sorting;
