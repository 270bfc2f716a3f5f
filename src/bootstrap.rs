//! Builds a ready-to-use store from configuration.

use crate::board::{
    adapters::{
        document::{DocumentGatewaySettings, DocumentProjectGateway},
        local::FilePreferenceStore,
        memory::{InMemoryPreferenceStore, InMemoryProjectGateway},
        postgres::PostgresProjectGateway,
    },
    ports::{PreferenceStore, PreferenceStoreError, ProjectGateway, TransportError},
    services::BoardStore,
};
use crate::config::{BackendKind, BoardConfig, ConfigError};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while assembling a store.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The configuration is incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The gateway could not be created.
    #[error(transparent)]
    Gateway(#[from] TransportError),
    /// The preference slot could not be opened.
    #[error(transparent)]
    Preferences(#[from] PreferenceStoreError),
}

/// Creates the gateway selected by `config`.
///
/// # Errors
///
/// Returns [`BootstrapError::Config`] when the selected backend lacks a
/// required setting and [`BootstrapError::Gateway`] when a connection pool
/// cannot be built.
pub fn build_gateway(config: &BoardConfig) -> Result<Arc<dyn ProjectGateway>, BootstrapError> {
    let kind = config.backend.kind;
    let missing = |field| ConfigError::MissingSetting {
        backend: kind.as_str(),
        field,
    };
    match kind {
        BackendKind::Memory => Ok(Arc::new(InMemoryProjectGateway::new())),
        BackendKind::Document => {
            let bin_id = config
                .document
                .bin_id
                .clone()
                .ok_or_else(|| missing("document.bin_id"))?;
            let access_key = config
                .document
                .access_key
                .clone()
                .ok_or_else(|| missing("document.access_key"))?;
            let settings =
                DocumentGatewaySettings::new(config.document.base_url.clone(), bin_id, access_key);
            Ok(Arc::new(DocumentProjectGateway::new(settings)))
        }
        BackendKind::Postgres => {
            let database_url = config
                .postgres
                .database_url
                .as_deref()
                .ok_or_else(|| missing("postgres.database_url"))?;
            let gateway =
                PostgresProjectGateway::connect(database_url, config.postgres.max_pool_size)?;
            Ok(Arc::new(gateway))
        }
    }
}

/// Creates the local preference slot selected by `config`.
///
/// # Errors
///
/// Returns [`BootstrapError::Preferences`] when the preference directory
/// cannot be opened.
pub fn build_preference_store(
    config: &BoardConfig,
) -> Result<Arc<dyn PreferenceStore>, BootstrapError> {
    match &config.preferences.directory {
        Some(directory) => Ok(Arc::new(FilePreferenceStore::open(directory)?)),
        None => Ok(Arc::new(InMemoryPreferenceStore::new())),
    }
}

/// Assembles a store for `config` and loads the board.
///
/// A failed initial fetch is logged by the store and leaves it empty.
///
/// # Errors
///
/// Returns [`BootstrapError`] when the gateway or preference slot cannot be
/// created.
pub async fn open_store(config: &BoardConfig) -> Result<BoardStore<DefaultClock>, BootstrapError> {
    let gateway = build_gateway(config)?;
    let preference_store = build_preference_store(config)?;
    tracing::info!(backend = config.backend.kind.as_str(), "opening board store");
    let mut store = BoardStore::new(gateway, preference_store, Arc::new(DefaultClock))
        .with_preference_mirroring(config.preferences.mirror_to_remote);
    store.fetch_all().await;
    Ok(store)
}
