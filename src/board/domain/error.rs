//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The priority lies outside the 1..=5 scale.
    #[error("invalid priority {0}, expected an integer between 1 and 5")]
    InvalidPriority(i64),

    /// The accent colour is not one of the supported tokens.
    #[error("unknown accent colour: {0}")]
    UnknownAccentColor(String),

    /// The theme name is neither `light` nor `dark`.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
