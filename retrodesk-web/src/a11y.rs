// Accessibility helpers
use crate::dom::{self, Listener};
use retrodesk_core::a11y::{FOCUSABLE_QUERY, focus_trap_target};
use retrodesk_core::keys::{GlobalKey, global_key};
use retrodesk_core::system::{BodyFlag, SystemPreferences};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
/// Focus rings only show once the keyboard has been used.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    "body.keyboard-navigation :focus{outline:3px solid #CCFF00;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;} .skip-link:focus{position:static;width:auto;height:auto;clip:auto;} body.reduced-motion *{animation:none!important;transition:none!important;scroll-behavior:auto!important}"
}

pub fn set_body_flag(flag: BodyFlag, enabled: bool) {
    dom::toggle_body_class(flag.class(), enabled);
}

/// Mirror the OS motion/contrast preferences onto `<body>`.
pub fn apply_system_flags(system: SystemPreferences) {
    for (flag, enabled) in system.body_flags() {
        set_body_flag(flag, enabled);
    }
}

/// Move focus to a skip-link target.
///
/// The target gets a temporary `tabindex="-1"` so it can take focus; the
/// attribute is dropped again on the first blur to keep the normal tab order.
pub fn focus_skip_target(id: &str) -> bool {
    let Some(target) = dom::html_element_by_id(id) else {
        log::debug!("skip link target #{id} not found");
        return false;
    };
    let _ = target.set_attribute("tabindex", "-1");
    let _ = target.focus();
    let cleanup = target.clone();
    dom::listen_once(&target, "blur", move || {
        let _ = cleanup.remove_attribute("tabindex");
    });
    true
}

/// Restore focus to the element with `id`, if it still exists.
pub fn restore_focus(id: &str) {
    let _ = dom::focus_by_id(id);
}

fn focusable_elements(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Focus the first focusable descendant of `container`.
pub fn focus_first(container: &Element) -> bool {
    focusable_elements(container)
        .first()
        .is_some_and(|el| el.focus().is_ok())
}

/// Keep Tab / Shift+Tab cycling inside `container` until the returned
/// listener is dropped.
pub fn trap_focus(container: &Element) -> Option<Listener> {
    let scope = container.clone();
    Listener::new(container, "keydown", move |event| {
        let Some(e) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if e.key() != "Tab" {
            return;
        }
        let items = focusable_elements(&scope);
        let active = dom::document().and_then(|d| d.active_element());
        let active_inside = active.as_ref().is_some_and(|a| {
            let node: &Node = a;
            scope.contains(Some(node))
        });
        let active_idx = active.as_ref().and_then(|a| {
            items
                .iter()
                .position(|item| AsRef::<Element>::as_ref(item) == a)
        });
        if let Some(idx) = focus_trap_target(items.len(), active_idx, e.shift_key(), active_inside)
            && let Some(target) = items.get(idx)
        {
            e.prevent_default();
            let _ = target.focus();
        }
    })
}

/// Page-wide keyboard behaviour.
///
/// Tab turns on the `keyboard-navigation` body flag and a mouse press turns
/// it off. Escape runs `on_escape`. Enter/Space activate custom
/// `role="button"` elements the way they activate native buttons.
pub fn install_document_helpers(on_escape: impl Fn() + 'static) -> Vec<Listener> {
    let Some(doc) = dom::document() else {
        return Vec::new();
    };
    let keydown = Listener::new(&doc, "keydown", move |event| {
        let Some(e) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let target = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok());
        let custom_button = target.as_ref().is_some_and(|el| {
            el.get_attribute("role").as_deref() == Some("button") && el.tag_name() != "BUTTON"
        });
        match global_key(&e.key(), custom_button) {
            Some(GlobalKey::Tab) => set_body_flag(BodyFlag::KeyboardNavigation, true),
            Some(GlobalKey::Escape) => on_escape(),
            Some(GlobalKey::Activate { prevent_scroll }) => {
                if prevent_scroll {
                    e.prevent_default();
                }
                if let Some(el) = target {
                    el.click();
                }
            }
            None => {}
        }
    });
    let mousedown = Listener::new(&doc, "mousedown", |_| {
        set_body_flag(BodyFlag::KeyboardNavigation, false);
    });
    keydown.into_iter().chain(mousedown).collect()
}
