//! Remote persistence port for projects and tasks.

use crate::board::domain::{BoardChange, Snapshot};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, TransportError>;

/// Remote store holding the board.
///
/// Implementations are either snapshot-shaped (write the whole board on
/// every save) or relational (apply only the [`BoardChange`]). Callers hand
/// over both and never depend on which shape is in use.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Fetches every project with its tasks.
    ///
    /// An empty remote store yields [`Snapshot::empty`], not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the remote store cannot be reached or
    /// answers with a failure.
    async fn load(&self) -> GatewayResult<Snapshot>;

    /// Persists a mutation.
    ///
    /// `snapshot` is the complete board after the mutation and `change`
    /// names the entity it touched.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the remote store cannot be reached or
    /// rejects the write.
    async fn save(&self, snapshot: &Snapshot, change: &BoardChange) -> GatewayResult<()>;
}

/// Failure talking to a persistence gateway.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request never completed.
    #[error("transport failure: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),

    /// The remote store answered with a non-success HTTP status.
    #[error("remote store responded with HTTP {status}")]
    HttpStatus {
        /// Response status code.
        status: u16,
    },

    /// The remote payload could not be decoded.
    #[error("malformed remote payload: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps a network or driver error.
    #[must_use]
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }

    /// Wraps a decoding error.
    #[must_use]
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
