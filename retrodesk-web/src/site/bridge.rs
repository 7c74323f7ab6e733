//! `CustomEvent`s on `document` for page scripts outside the Yew tree.
use super::SiteHandle;
use crate::dom::{self, Listener};
use retrodesk_core::content::ContentMode;
use retrodesk_core::events::SiteEvent;
use retrodesk_core::theme::Theme;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit};

pub const THEME_CHANGED: &str = "themeChanged";
pub const CONTENT_CHANGED: &str = "contentChanged";
pub const ESCAPE_PRESSED: &str = "escapePressed";
pub const SWITCH_CONTENT_REQUESTED: &str = "switchContentRequested";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDetail {
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDetail {
    pub content: ContentMode,
}

/// DOM event name for a site event, if it is bridged at all.
#[must_use]
pub const fn event_name(event: &SiteEvent) -> Option<&'static str> {
    match event {
        SiteEvent::ThemeChanged { .. } => Some(THEME_CHANGED),
        SiteEvent::ContentChanged { .. } => Some(CONTENT_CHANGED),
        SiteEvent::EscapePressed => Some(ESCAPE_PRESSED),
        SiteEvent::ContentSwitchRequested { .. }
        | SiteEvent::SystemChanged(_)
        | SiteEvent::Announce(_) => None,
    }
}

fn encode_detail(event: &SiteEvent) -> Result<JsValue, serde_wasm_bindgen::Error> {
    match event {
        SiteEvent::ThemeChanged { theme, .. } => {
            serde_wasm_bindgen::to_value(&ThemeDetail { theme: *theme })
        }
        SiteEvent::ContentChanged { mode } => {
            serde_wasm_bindgen::to_value(&ContentDetail { content: *mode })
        }
        _ => Ok(JsValue::NULL),
    }
}

/// Re-dispatch a site event on `document`. Returns `false` for events that
/// are not bridged or when dispatch fails.
pub fn dispatch(event: &SiteEvent) -> bool {
    let Some(name) = event_name(event) else {
        return false;
    };
    let Some(doc) = dom::document() else {
        return false;
    };
    let detail = match encode_detail(event) {
        Ok(value) => value,
        Err(err) => {
            log::error!("failed to encode {name} detail: {err}");
            return false;
        }
    };
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    let Ok(custom) = CustomEvent::new_with_event_init_dict(name, &init) else {
        return false;
    };
    doc.dispatch_event(&custom).is_ok()
}

/// Honour `switchContentRequested` events (`detail: { content }`) from page
/// scripts for as long as the listener lives.
pub fn listen_for_content_requests(handle: &SiteHandle) -> Option<Listener> {
    let doc = dom::document()?;
    let runtime = handle.downgrade();
    Listener::new(&doc, SWITCH_CONTENT_REQUESTED, move |event| {
        let Some(custom) = event.dyn_ref::<CustomEvent>() else {
            return;
        };
        let mode = match serde_wasm_bindgen::from_value::<ContentDetail>(custom.detail()) {
            Ok(detail) => detail.content,
            Err(err) => {
                log::warn!("ignoring {SWITCH_CONTENT_REQUESTED}: {err}");
                return;
            }
        };
        if let Some(runtime) = runtime.upgrade() {
            runtime.update(|s| s.switch_content(mode));
        }
    })
}
