//! Content modes (standard vs easy-read)
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContentMode {
    #[default]
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "easy-read")]
    EasyRead,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown content mode `{0}`")]
pub struct ParseContentModeError(pub String);

impl ContentMode {
    pub const ALL: [Self; 2] = [Self::Standard, Self::EasyRead];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::EasyRead => "easy-read",
        }
    }

    /// Name used in announcements.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::EasyRead => "Easy Read",
        }
    }

    /// Class of the content block shown for this mode.
    #[must_use]
    pub const fn block_class(self) -> &'static str {
        match self {
            Self::Standard => "standard-content",
            Self::EasyRead => "easy-read-content",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Standard => Self::EasyRead,
            Self::EasyRead => Self::Standard,
        }
    }

    /// Easy-read pins the display to the high-contrast theme.
    #[must_use]
    pub const fn forces_high_contrast(self) -> bool {
        matches!(self, Self::EasyRead)
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentMode {
    type Err = ParseContentModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "easy-read" => Ok(Self::EasyRead),
            other => Err(ParseContentModeError(other.to_string())),
        }
    }
}
