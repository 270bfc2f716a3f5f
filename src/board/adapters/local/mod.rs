//! Local filesystem adapters.

mod preferences;

pub use preferences::FilePreferenceStore;
