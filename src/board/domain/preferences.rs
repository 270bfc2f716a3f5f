//! Process-wide display preferences.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background.
    #[default]
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(BoardDomainError::UnknownTheme(value.to_owned())),
        }
    }
}

/// Accent colour applied to interactive elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    /// Neutral gray.
    #[default]
    Gray,
    /// Blue.
    Blue,
    /// Orange.
    Orange,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Pink.
    Pink,
    /// Yellow.
    Yellow,
    /// Cyan.
    Cyan,
}

impl AccentColor {
    /// Every accent colour in picker order.
    pub const ALL: [Self; 9] = [
        Self::Gray,
        Self::Blue,
        Self::Orange,
        Self::Red,
        Self::Green,
        Self::Purple,
        Self::Pink,
        Self::Yellow,
        Self::Cyan,
    ];

    /// Returns the token name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
        }
    }
}

impl TryFrom<&str> for AccentColor {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == normalized)
            .ok_or_else(|| BoardDomainError::UnknownAccentColor(value.to_owned()))
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme and accent colour chosen by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Colour scheme.
    #[serde(default)]
    pub theme: Theme,
    /// Accent colour.
    #[serde(default)]
    pub accent_color: AccentColor,
}
