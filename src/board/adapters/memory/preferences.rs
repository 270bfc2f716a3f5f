//! Preference slot kept in memory.

use std::sync::{Arc, RwLock};

use crate::board::{
    domain::Preferences,
    ports::{PreferenceStore, PreferenceStoreError},
};

/// Thread-safe in-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    slot: Arc<RwLock<Option<Preferences>>>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `preferences`.
    #[must_use]
    pub fn with_preferences(preferences: Preferences) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(preferences))),
        }
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> PreferenceStoreError {
    PreferenceStoreError::from(std::io::Error::other(err.to_string()))
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self) -> Result<Option<Preferences>, PreferenceStoreError> {
        let slot = self.slot.read().map_err(poisoned)?;
        Ok(*slot)
    }

    fn save(&self, preferences: &Preferences) -> Result<(), PreferenceStoreError> {
        let mut slot = self.slot.write().map_err(poisoned)?;
        *slot = Some(*preferences);
        Ok(())
    }
}
