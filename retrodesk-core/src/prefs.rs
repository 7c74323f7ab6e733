//! Persisted user preferences
//!
//! The site stores two plain string keys. Browsers back this with
//! `localStorage`; everything else (tests, SSR, storage-less browsers) uses
//! [`MemoryPrefs`].
use crate::content::ContentMode;
use crate::theme::Theme;
use std::collections::BTreeMap;
use thiserror::Error;

pub const THEME_KEY: &str = "theme";
pub const CONTENT_KEY: &str = "contentVersion";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefsError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to write preference `{key}`: {message}")]
    Write { key: String, message: String },
}

/// Key-value preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the removal.
    fn remove(&mut self, key: &str) -> Result<(), PrefsError>;
}

/// In-memory preference map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPrefs {
    entries: BTreeMap<String, String>,
}

impl MemoryPrefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        self.entries.remove(key);
        Ok(())
    }
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        (**self).remove(key)
    }
}

/// Theme saved by the user, ignoring values this build does not understand.
pub fn saved_theme<P: PreferenceStore + ?Sized>(prefs: &P) -> Option<Theme> {
    let raw = prefs.get(THEME_KEY)?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::warn!("ignoring stored theme: {err}");
            None
        }
    }
}

/// Content mode saved by the user, ignoring unknown values.
pub fn saved_content<P: PreferenceStore + ?Sized>(prefs: &P) -> Option<ContentMode> {
    let raw = prefs.get(CONTENT_KEY)?;
    match raw.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            log::warn!("ignoring stored content mode: {err}");
            None
        }
    }
}
