//! Configuration for the board store.
//!
//! Values are layered with the following priority (highest first):
//! 1. Environment variables (`KANBAN_DOCUMENT_ACCESS_KEY`, `KANBAN_DATABASE_URL`)
//! 2. TOML config file
//! 3. Compiled defaults

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the document access key.
pub const ACCESS_KEY_ENV: &str = "KANBAN_DOCUMENT_ACCESS_KEY";
/// Environment variable overriding the database URL.
pub const DATABASE_URL_ENV: &str = "KANBAN_DATABASE_URL";

const DEFAULT_DOCUMENT_BASE_URL: &str = "https://api.jsonbin.io/v3/b";
const DEFAULT_POOL_SIZE: u32 = 4;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// A backend was selected without the settings it needs.
    #[error("backend '{backend}' requires `{field}` to be set")]
    MissingSetting {
        /// Selected backend.
        backend: &'static str,
        /// Missing setting.
        field: &'static str,
    },
}

/// Which persistence gateway backs the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Nothing leaves the process.
    #[default]
    Memory,
    /// Single JSON document over HTTP.
    Document,
    /// Relational tables in `PostgreSQL`.
    Postgres,
}

impl BackendKind {
    /// Returns the configuration name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Document => "document",
            Self::Postgres => "postgres",
        }
    }
}

/// `[backend]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Selected gateway.
    pub kind: BackendKind,
}

/// `[document]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Base URL of the document service.
    pub base_url: String,
    /// Identifier of the document holding the board.
    pub bin_id: Option<String>,
    /// Static access key.
    pub access_key: Option<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DOCUMENT_BASE_URL.to_owned(),
            bin_id: None,
            access_key: None,
        }
    }
}

/// `[postgres]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostgresConfig {
    /// Connection string.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub max_pool_size: u32,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

/// `[preferences]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Directory holding the local preference file; in-memory when unset.
    pub directory: Option<Utf8PathBuf>,
    /// Also write preferences to the remote gateway.
    pub mirror_to_remote: bool,
}

/// Complete store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Default tracing filter, overridden by `RUST_LOG`.
    pub log_level: String,
    /// Gateway selection.
    pub backend: BackendConfig,
    /// Document backend settings.
    pub document: DocumentConfig,
    /// Relational backend settings.
    pub postgres: PostgresConfig,
    /// Local preference settings.
    pub preferences: PreferencesConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            backend: BackendConfig::default(),
            document: DocumentConfig::default(),
            postgres: PostgresConfig::default(),
            preferences: PreferencesConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Parses configuration from TOML text; missing sections use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] for malformed TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML file, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] when the file cannot be read and
    /// [`ConfigError::ParseToml`] when it is malformed.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::ReadFile {
            path: path.to_owned(),
            source,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error(std::io::Error::other("path must include a file name")))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let text = dir.read_to_string(file_name).map_err(read_error)?;

        let mut config = Self::from_toml_str(&text)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Applies overrides from a variable lookup.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(access_key) = lookup(ACCESS_KEY_ENV) {
            self.document.access_key = Some(access_key);
        }
        if let Some(database_url) = lookup(DATABASE_URL_ENV) {
            self.postgres.database_url = Some(database_url);
        }
    }
}
