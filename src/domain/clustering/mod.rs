//! Clustering Module - PROMETHEE-based clustering of alternatives.
//!
//! # Components
//!
//! - `PrometheeCluster` - the assign / update loop with an iteration cap
//! - `ProfileUpdater` - median profile recomputation
//! - `ClusterStatus` - run lifecycle (`Initialized -> Iterating -> Converged`)
//! - `ClusterResult` - groups, final assignment and profiles, warnings
//! - `ClusteringCompleted` - event emitted for a converged run
//!
//! # Example
//!
//! ```ignore
//! let engine = PrometheeCluster::new(100);
//! let mut seeder = RandomSampleSeeder::from_seed(42);
//! let result = engine.run(&table, &criteria, 2, &mut seeder)?;
//! for group in result.groups() {
//!     println!("{}: {:?}", group.category, group.members);
//! }
//! ```

mod engine;
mod errors;
mod events;
mod profile_updater;
mod result;
mod status;

pub use engine::PrometheeCluster;
pub use errors::{ClusterError, ConfigurationError};
pub use events::{ClusteringCompleted, GroupSummary};
pub use profile_updater::{median, ProfileUpdate, ProfileUpdater};
pub use result::{ClusterGroup, ClusterResult, DegenerateCategory};
pub use status::ClusterStatus;
