//! retrodesk core
//!
//! Platform-agnostic state for the retrodesk site: the theme / content-mode
//! synchronisation, preference storage, typed site events, navigation and
//! accessibility rules. This crate has no DOM dependencies; the web crate
//! wires it to the browser.

pub mod a11y;
pub mod config;
pub mod content;
pub mod events;
pub mod keys;
pub mod nav;
pub mod palette;
pub mod prefs;
pub mod state;
pub mod system;
pub mod theme;

// Re-export commonly used types
pub use config::{ConfigError, FolderLink, SectionCopy, SiteConfig};
pub use content::{ContentMode, ParseContentModeError};
pub use events::{
    Announcement, EventBus, Handler, Politeness, SiteEvent, SubscriptionId, Transition,
};
pub use keys::{GlobalKey, ThemeKeyAction, global_key, theme_key_action};
pub use nav::{NavKey, Orientation, RovingGroup, ScrollSpy, SectionOffset, scroll_target_top};
pub use palette::{IconVisual, Paint, Palette, Palettes};
pub use prefs::{CONTENT_KEY, MemoryPrefs, PreferenceStore, PrefsError, THEME_KEY};
pub use state::{ContentButtonState, SiteSnapshot, SiteState, ThemeButtonState};
pub use system::{BodyFlag, SystemPreferences};
pub use theme::{CycleDirection, ParseThemeError, Theme};
