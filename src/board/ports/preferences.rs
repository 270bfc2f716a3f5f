//! Local persistence port for display preferences.
//!
//! Only the theme and accent colour are stored locally; project data always
//! comes from the remote gateway so the two copies cannot diverge.

use crate::board::domain::Preferences;
use std::sync::Arc;
use thiserror::Error;

/// Fixed key naming the local preference slot.
pub const PREFERENCES_STORAGE_KEY: &str = "kanban-preferences";

/// Key-value slot for preferences.
pub trait PreferenceStore: Send + Sync {
    /// Reads the stored preferences, `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when the slot exists but cannot be
    /// read or decoded.
    fn load(&self) -> Result<Option<Preferences>, PreferenceStoreError>;

    /// Overwrites the stored preferences.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError`] when the slot cannot be written.
    fn save(&self, preferences: &Preferences) -> Result<(), PreferenceStoreError>;
}

/// Errors raised by preference stores.
#[derive(Debug, Clone, Error)]
pub enum PreferenceStoreError {
    /// Reading or writing the slot failed.
    #[error("preference storage failure: {0}")]
    Io(Arc<std::io::Error>),

    /// The slot holds malformed data.
    #[error("malformed preference data: {0}")]
    Decode(Arc<serde_json::Error>),
}

impl From<std::io::Error> for PreferenceStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for PreferenceStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(Arc::new(err))
    }
}
