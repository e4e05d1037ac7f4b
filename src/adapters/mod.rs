//! Adapters - Implementations of port interfaces.
//!
//! - `seeding` - Random and fixed profile seeders
//! - `events` - In-memory event publisher

pub mod events;
pub mod seeding;

pub use events::InMemoryEventPublisher;
pub use seeding::{FixedSeeder, RandomSampleSeeder};
