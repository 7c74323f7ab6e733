//! Colour themes and their wire names
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three site themes.
///
/// Serialised (and persisted) as `light`, `dark` or `hicontrast`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
    #[serde(rename = "hicontrast")]
    HighContrast,
}

/// Direction of a keyboard theme cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(pub String);

impl Theme {
    /// Cycle order used by the arrow keys.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::HighContrast];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "hicontrast",
        }
    }

    /// Human-readable name used in announcements.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high contrast",
        }
    }

    /// Accessible name of the matching theme button.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Light => "Light theme",
            Self::Dark => "Dark theme",
            Self::HighContrast => "High contrast theme",
        }
    }

    /// Theme implied by the operating system colour scheme.
    #[must_use]
    pub const fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_high_contrast(self) -> bool {
        matches!(self, Self::HighContrast)
    }

    const fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
            Self::HighContrast => 2,
        }
    }

    /// Neighbouring theme in [`Theme::ALL`], wrapping at both ends.
    #[must_use]
    pub const fn step(self, direction: CycleDirection) -> Self {
        let len = Self::ALL.len();
        let idx = match direction {
            CycleDirection::Forward => (self.index() + 1) % len,
            CycleDirection::Backward => (self.index() + len - 1) % len,
        };
        Self::ALL[idx]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "hicontrast" => Ok(Self::HighContrast),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}
