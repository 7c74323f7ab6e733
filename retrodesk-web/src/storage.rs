//! `localStorage`-backed preferences with an in-memory fallback.
use crate::dom;
use retrodesk_core::prefs::{MemoryPrefs, PreferenceStore, PrefsError};
use web_sys::Storage;

#[derive(Debug, Clone)]
pub enum LocalPrefs {
    Browser(Storage),
    /// Storage is blocked or we are not in a browser.
    Memory(MemoryPrefs),
}

impl Default for LocalPrefs {
    fn default() -> Self {
        Self::Memory(MemoryPrefs::new())
    }
}

impl LocalPrefs {
    /// `localStorage` when reachable, otherwise an empty in-memory store.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            match dom::local_storage() {
                Ok(storage) => return Self::Browser(storage),
                Err(err) => log::warn!(
                    "localStorage unavailable, preferences will not persist: {}",
                    dom::js_error_message(&err)
                ),
            }
        }
        Self::default()
    }

    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        matches!(self, Self::Browser(_))
    }
}

impl From<MemoryPrefs> for LocalPrefs {
    fn from(prefs: MemoryPrefs) -> Self {
        Self::Memory(prefs)
    }
}

impl PreferenceStore for LocalPrefs {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Browser(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(prefs) => prefs.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        match self {
            Self::Browser(storage) => storage.set_item(key, value).map_err(|err| PrefsError::Write {
                key: key.to_string(),
                message: dom::js_error_message(&err),
            }),
            Self::Memory(prefs) => prefs.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        match self {
            Self::Browser(storage) => storage.remove_item(key).map_err(|err| PrefsError::Write {
                key: key.to_string(),
                message: dom::js_error_message(&err),
            }),
            Self::Memory(prefs) => prefs.remove(key),
        }
    }
}
