use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollToOptions, Storage, Window,
};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

#[must_use]
pub fn body() -> Option<HtmlElement> {
    document().and_then(|doc| doc.body())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

pub fn set_body_attribute(name: &str, value: &str) {
    if let Some(body) = body() {
        let _ = body.set_attribute(name, value);
    }
}

pub fn toggle_body_class(class: &str, enabled: bool) {
    if let Some(body) = body() {
        let _ = body.class_list().toggle_with_force(class, enabled);
    }
}

#[must_use]
pub fn body_has_class(class: &str) -> bool {
    body().is_some_and(|b| b.class_list().contains(class))
}

/// Currently focused element, when it is an `HtmlElement`.
#[must_use]
pub fn active_html_element() -> Option<HtmlElement> {
    document()
        .and_then(|doc| doc.active_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

#[must_use]
pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Move focus to the element with `id`. Returns whether it exists.
pub fn focus_by_id(id: &str) -> bool {
    html_element_by_id(id).is_some_and(|el| el.focus().is_ok())
}

#[must_use]
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Inner width and height of the window.
#[must_use]
pub fn viewport_size() -> Option<(f64, f64)> {
    let win = window()?;
    let width = win.inner_width().ok()?.as_f64()?;
    let height = win.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Distance from the top of the document to `el`.
#[must_use]
pub fn document_top(el: &Element) -> f64 {
    el.get_bounding_client_rect().top() + scroll_y()
}

pub fn scroll_to(top: f64, smooth: bool) {
    let Some(win) = window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    win.scroll_to_with_scroll_to_options(&opts);
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `target` for `event`.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").field("event", &self.event).finish()
    }
}

/// Run `handler` the first time `event` fires on `target`; the browser drops
/// the listener afterwards.
pub fn listen_once(target: &EventTarget, event: &str, handler: impl FnOnce() + 'static) {
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    let callback = Closure::once_into_js(handler);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &opts,
    );
}
