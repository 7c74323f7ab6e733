//! Theme and content-mode state
//!
//! [`SiteState`] owns the displayed theme, the content mode, the OS display
//! preferences and the preference store. Every mutating operation returns a
//! [`Transition`] describing what happened so the caller can publish it.
//!
//! While the content mode is easy-read the displayed theme is always
//! high-contrast and every other theme button is disabled.
use crate::content::ContentMode;
use crate::events::{Announcement, SiteEvent, Transition};
use crate::prefs::{CONTENT_KEY, PreferenceStore, THEME_KEY, saved_content, saved_theme};
use crate::system::SystemPreferences;
use crate::theme::{CycleDirection, Theme};

pub const DISABLED_THEME_TITLE: &str = "Theme selection disabled in Easy Read mode";

/// Render-ready view of one theme button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeButtonState {
    pub theme: Theme,
    pub active: bool,
    pub disabled: bool,
    pub title: Option<&'static str>,
}

/// Render-ready view of the easy-read toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentButtonState {
    pub active: bool,
    pub label: &'static str,
    pub aria_label: &'static str,
}

/// Everything the UI needs to render, without the storage handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiteSnapshot {
    pub theme: Theme,
    pub content: ContentMode,
    pub system: SystemPreferences,
}

impl SiteSnapshot {
    #[must_use]
    pub fn theme_buttons(&self) -> [ThemeButtonState; 3] {
        theme_buttons(self.theme, self.content)
    }

    #[must_use]
    pub const fn content_button(&self) -> ContentButtonState {
        content_button(self.content)
    }
}

/// Button states for a displayed theme under a content mode.
#[must_use]
pub fn theme_buttons(theme: Theme, content: ContentMode) -> [ThemeButtonState; 3] {
    Theme::ALL.map(|candidate| {
        if content.forces_high_contrast() {
            let allowed = candidate.is_high_contrast();
            ThemeButtonState {
                theme: candidate,
                active: allowed,
                disabled: !allowed,
                title: (!allowed).then_some(DISABLED_THEME_TITLE),
            }
        } else {
            ThemeButtonState {
                theme: candidate,
                active: candidate == theme,
                disabled: false,
                title: None,
            }
        }
    })
}

#[must_use]
pub const fn content_button(content: ContentMode) -> ContentButtonState {
    match content {
        ContentMode::Standard => ContentButtonState {
            active: false,
            label: "easy read",
            aria_label: "Switch to Easy Read version",
        },
        ContentMode::EasyRead => ContentButtonState {
            active: true,
            label: "hard read",
            aria_label: "Switch to Standard version",
        },
    }
}

/// Content mode to paint before anything else runs.
pub fn initial_content<P: PreferenceStore + ?Sized>(prefs: &P) -> ContentMode {
    saved_content(prefs).unwrap_or_default()
}

/// Theme to paint before anything else runs, honouring easy-read.
pub fn initial_theme<P: PreferenceStore + ?Sized>(prefs: &P, system: SystemPreferences) -> Theme {
    if initial_content(prefs).forces_high_contrast() {
        Theme::HighContrast
    } else {
        saved_theme(prefs).unwrap_or_else(|| Theme::from_system(system.prefers_dark))
    }
}

#[derive(Debug)]
pub struct SiteState<P> {
    prefs: P,
    system: SystemPreferences,
    theme: Theme,
    content: ContentMode,
}

impl<P: PreferenceStore> SiteState<P> {
    /// Build state from stored preferences without emitting anything.
    pub fn new(prefs: P, system: SystemPreferences) -> Self {
        let content = initial_content(&prefs);
        let theme = initial_theme(&prefs, system);
        Self {
            prefs,
            system,
            theme,
            content,
        }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn content(&self) -> ContentMode {
        self.content
    }

    #[must_use]
    pub const fn system(&self) -> SystemPreferences {
        self.system
    }

    #[must_use]
    pub const fn prefs(&self) -> &P {
        &self.prefs
    }

    #[must_use]
    pub const fn snapshot(&self) -> SiteSnapshot {
        SiteSnapshot {
            theme: self.theme,
            content: self.content,
            system: self.system,
        }
    }

    #[must_use]
    pub fn saved_theme(&self) -> Option<Theme> {
        saved_theme(&self.prefs)
    }

    /// Saved theme, else the one the OS colour scheme implies.
    #[must_use]
    pub fn preferred_theme(&self) -> Theme {
        self.saved_theme()
            .unwrap_or_else(|| Theme::from_system(self.system.prefers_dark))
    }

    #[must_use]
    pub fn theme_buttons(&self) -> [ThemeButtonState; 3] {
        theme_buttons(self.theme, self.content)
    }

    #[must_use]
    pub const fn content_button(&self) -> ContentButtonState {
        content_button(self.content)
    }

    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        if !self.content.forces_high_contrast() {
            return true;
        }
        self.theme.is_high_contrast()
            && self
                .theme_buttons()
                .iter()
                .all(|b| b.disabled != b.theme.is_high_contrast() && b.active == !b.disabled)
    }

    /// Apply the stored (or OS) theme, then the stored content mode.
    pub fn initialize(&mut self) -> Transition {
        let mut t = Transition::new();
        let theme = self.preferred_theme();
        let persist = self.saved_theme().is_some();
        self.apply_theme(theme, persist, &mut t);
        let content = initial_content(&self.prefs);
        self.apply_content(content, &mut t);
        log::info!(
            "site initialised: theme={} content={}",
            self.theme,
            self.content
        );
        t
    }

    /// Apply `theme`, writing it to storage when `persist` is set.
    ///
    /// A non-high-contrast theme while easy-read is active first switches the
    /// content back to standard.
    pub fn set_theme(&mut self, theme: Theme, persist: bool) -> Transition {
        let mut t = Transition::new();
        if self.content.forces_high_contrast() && !theme.is_high_contrast() {
            t.push(SiteEvent::ContentSwitchRequested {
                mode: ContentMode::Standard,
            });
            self.apply_content(ContentMode::Standard, &mut t);
        }
        self.apply_theme(theme, persist, &mut t);
        t
    }

    /// Theme button click. Disabled buttons do nothing.
    pub fn select_theme(&mut self, theme: Theme) -> Transition {
        if self.is_theme_disabled(theme) {
            log::debug!("ignoring disabled theme button {theme}");
            return Transition::new();
        }
        self.set_theme(theme, true)
    }

    /// Arrow key on the button for `from`.
    pub fn cycle_theme(&mut self, from: Theme, direction: CycleDirection) -> Transition {
        if self.is_theme_disabled(from) {
            return Transition::new();
        }
        let next = self.theme.step(direction);
        self.set_theme(next, true)
    }

    #[must_use]
    pub fn is_theme_disabled(&self, theme: Theme) -> bool {
        self.content.forces_high_contrast() && !theme.is_high_contrast()
    }

    pub fn switch_content(&mut self, mode: ContentMode) -> Transition {
        let mut t = Transition::new();
        self.apply_content(mode, &mut t);
        t
    }

    pub fn toggle_content(&mut self) -> Transition {
        self.switch_content(self.content.toggled())
    }

    /// OS colour scheme flipped.
    ///
    /// Only follows the OS when the user never picked a theme and easy-read
    /// is off.
    pub fn system_color_scheme_changed(&mut self, prefers_dark: bool) -> Transition {
        let mut t = Transition::new();
        self.system.prefers_dark = prefers_dark;
        t.push(SiteEvent::SystemChanged(self.system));
        if self.saved_theme().is_none() && !self.content.forces_high_contrast() {
            self.apply_theme(Theme::from_system(prefers_dark), false, &mut t);
        }
        t
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) -> Transition {
        self.system.prefers_reduced_motion = enabled;
        SiteEvent::SystemChanged(self.system).into()
    }

    pub fn set_more_contrast(&mut self, enabled: bool) -> Transition {
        self.system.prefers_more_contrast = enabled;
        SiteEvent::SystemChanged(self.system).into()
    }

    fn apply_theme(&mut self, theme: Theme, persist: bool, t: &mut Transition) {
        self.theme = theme;
        if persist {
            self.write(THEME_KEY, theme.as_str());
        }
        t.push(SiteEvent::ThemeChanged {
            theme,
            persisted: persist,
        });
        t.push(SiteEvent::Announce(Announcement::polite(format!(
            "Theme changed to {} mode",
            theme.label()
        ))));
    }

    fn apply_content(&mut self, mode: ContentMode, t: &mut Transition) {
        let theme = if mode.forces_high_contrast() {
            Theme::HighContrast
        } else {
            self.preferred_theme()
        };
        self.apply_theme(theme, false, t);
        self.content = mode;
        self.write(CONTENT_KEY, mode.as_str());
        t.push(SiteEvent::ContentChanged { mode });
        t.push(SiteEvent::Announce(Announcement::polite(format!(
            "Switched to {} content version",
            mode.label()
        ))));
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = self.prefs.set(key, value) {
            log::warn!("preference not saved: {err}");
        }
    }
}
