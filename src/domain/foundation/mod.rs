//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types used across the
//! preference, flow, sorting and clustering modules.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub(crate) use errors::{ensure_finite, ensure_non_negative};
pub use ids::RunId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
