//! Snapshot-shaped gateway kept entirely in memory.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{BoardChange, Snapshot},
    ports::{GatewayResult, ProjectGateway, TransportError},
};

/// Thread-safe in-memory gateway.
///
/// Every save replaces the stored snapshot and is appended to a change log
/// so tests can observe what the store persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectGateway {
    state: Arc<RwLock<InMemoryGatewayState>>,
}

#[derive(Debug, Default)]
struct InMemoryGatewayState {
    snapshot: Snapshot,
    changes: Vec<BoardChange>,
}

impl InMemoryProjectGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryGatewayState {
                snapshot,
                changes: Vec::new(),
            })),
        }
    }

    /// Returns the currently stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the internal lock is poisoned.
    pub fn stored(&self) -> GatewayResult<Snapshot> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.snapshot.clone())
    }

    /// Returns every change saved so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the internal lock is poisoned.
    pub fn changes(&self) -> GatewayResult<Vec<BoardChange>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.changes.clone())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> TransportError {
    TransportError::network(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectGateway for InMemoryProjectGateway {
    async fn load(&self) -> GatewayResult<Snapshot> {
        self.stored()
    }

    async fn save(&self, snapshot: &Snapshot, change: &BoardChange) -> GatewayResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.snapshot = snapshot.clone();
        state.changes.push(change.clone());
        Ok(())
    }
}
