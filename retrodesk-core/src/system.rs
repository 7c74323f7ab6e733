//! Operating-system display preferences and the body flags they drive
use serde::{Deserialize, Serialize};

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const MORE_CONTRAST_QUERY: &str = "(prefers-contrast: more)";

/// Snapshot of the media-query preferences the site reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemPreferences {
    pub prefers_dark: bool,
    pub prefers_reduced_motion: bool,
    pub prefers_more_contrast: bool,
}

/// Classes toggled on `<body>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyFlag {
    ReducedMotion,
    SystemHighContrast,
    KeyboardNavigation,
}

impl BodyFlag {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::ReducedMotion => "reduced-motion",
            Self::SystemHighContrast => "system-high-contrast",
            Self::KeyboardNavigation => "keyboard-navigation",
        }
    }
}

impl SystemPreferences {
    /// Body flags derived from the media queries, paired with whether each is on.
    #[must_use]
    pub const fn body_flags(self) -> [(BodyFlag, bool); 2] {
        [
            (BodyFlag::ReducedMotion, self.prefers_reduced_motion),
            (BodyFlag::SystemHighContrast, self.prefers_more_contrast),
        ]
    }
}
