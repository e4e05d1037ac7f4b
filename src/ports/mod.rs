//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileSeeder` - Source of the initial category profiles
//! - `EventPublisher` - Port for publishing clustering events

mod event_publisher;
mod profile_seeder;

pub use event_publisher::{EventPublisher, PublishError};
pub use profile_seeder::ProfileSeeder;
