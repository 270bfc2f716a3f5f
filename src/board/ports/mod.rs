//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the state store.

pub mod gateway;
pub mod preferences;

#[cfg(test)]
pub use gateway::MockProjectGateway;
pub use gateway::{GatewayResult, ProjectGateway, TransportError};
pub use preferences::{PREFERENCES_STORAGE_KEY, PreferenceStore, PreferenceStoreError};
