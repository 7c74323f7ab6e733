//! `matchMedia` queries for the OS display preferences.
use crate::dom;
use retrodesk_core::system::{
    DARK_SCHEME_QUERY, MORE_CONTRAST_QUERY, REDUCED_MOTION_QUERY, SystemPreferences,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{MediaQueryList, MediaQueryListEvent};

fn query(media: &str) -> Option<MediaQueryList> {
    dom::window()?.match_media(media).ok().flatten()
}

#[must_use]
pub fn matches(media: &str) -> bool {
    query(media).is_some_and(|list| list.matches())
}

/// Current OS preferences; all off outside a browser.
#[must_use]
pub fn detect_system() -> SystemPreferences {
    if !cfg!(target_arch = "wasm32") {
        return SystemPreferences::default();
    }
    SystemPreferences {
        prefers_dark: matches(DARK_SCHEME_QUERY),
        prefers_reduced_motion: matches(REDUCED_MOTION_QUERY),
        prefers_more_contrast: matches(MORE_CONTRAST_QUERY),
    }
}

/// A `change` listener on a media query, removed when dropped.
pub struct MediaListener {
    list: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl MediaListener {
    pub fn watch(media: &str, mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
        let list = query(media)?;
        let callback = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);
        list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { list, callback })
    }
}

impl Drop for MediaListener {
    fn drop(&mut self) {
        let _ = self
            .list
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}
