//! Task priority scale and its display classification.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency indicator from 1 (lowest) to 5 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Priority(u8);

impl Priority {
    /// Lowest priority on the scale.
    pub const LOWEST: Self = Self(1);
    /// Priority assigned when none is supplied.
    pub const DEFAULT: Self = Self(3);
    /// Highest priority on the scale.
    pub const HIGHEST: Self = Self(5);

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidPriority`] when the value is
    /// outside 1..=5.
    pub fn new(value: i64) -> Result<Self, BoardDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|candidate| (1..=5).contains(candidate))
            .map(Self)
            .ok_or(BoardDomainError::InvalidPriority(value))
    }

    /// Creates a priority, falling back to [`Priority::DEFAULT`] for missing
    /// or out-of-range values.
    #[must_use]
    pub fn or_default(value: Option<i64>) -> Self {
        value
            .and_then(|raw| Self::new(raw).ok())
            .unwrap_or_default()
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Priority {
    type Error = BoardDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        Self::from(priority.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Colour token used to render a priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityColor {
    /// Priority 1.
    Green,
    /// Priority 2.
    Lime,
    /// Priority 3.
    Yellow,
    /// Priority 4.
    Orange,
    /// Priority 5.
    Red,
    /// Anything outside the scale.
    Gray,
}

impl PriorityColor {
    /// Returns the token name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Lime => "lime",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }

    /// Returns the swatch used for the priority slider.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#22c55e",
            Self::Lime => "#84cc16",
            Self::Yellow => "#eab308",
            Self::Orange => "#f97316",
            Self::Red => "#ef4444",
            Self::Gray => "#6b7280",
        }
    }
}

/// Display metadata for a priority value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriorityAppearance {
    /// Human-readable label.
    pub label: &'static str,
    /// Badge colour.
    pub color: PriorityColor,
}

impl PriorityAppearance {
    const UNDEFINED: Self = Self {
        label: "Undefined",
        color: PriorityColor::Gray,
    };
}

/// Maps a raw priority to its label and colour.
///
/// A missing value is read as the default priority (3); any integer outside
/// 1..=5 gets the neutral "Undefined" appearance.
#[must_use]
pub fn classify(priority: Option<i64>) -> PriorityAppearance {
    let raw = priority.unwrap_or_else(|| i64::from(Priority::DEFAULT));
    let (label, color) = match raw {
        1 => ("Very low", PriorityColor::Green),
        2 => ("Low", PriorityColor::Lime),
        3 => ("Medium", PriorityColor::Yellow),
        4 => ("High", PriorityColor::Orange),
        5 => ("Very high", PriorityColor::Red),
        _ => return PriorityAppearance::UNDEFINED,
    };
    PriorityAppearance { label, color }
}

impl Priority {
    /// Returns the display metadata for this priority.
    #[must_use]
    pub fn appearance(self) -> PriorityAppearance {
        classify(Some(i64::from(self)))
    }
}
