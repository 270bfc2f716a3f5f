//! In-memory adapters for tests and demos.

mod gateway;
mod preferences;

pub use gateway::InMemoryProjectGateway;
pub use preferences::InMemoryPreferenceStore;
