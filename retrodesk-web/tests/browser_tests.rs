#![cfg(target_arch = "wasm32")]

use retrodesk_core::config::FolderLink;
use retrodesk_core::content::ContentMode;
use retrodesk_core::events::Announcement;
use retrodesk_core::prefs::{CONTENT_KEY, PreferenceStore, THEME_KEY};
use retrodesk_core::theme::Theme;
use retrodesk_web::announce::{ANNOUNCEMENT_CLASS, announce};
use retrodesk_web::components::folder_grid::{self, FolderGrid};
use retrodesk_web::dom::{self, Listener};
use retrodesk_web::site::SiteHandle;
use retrodesk_web::site::bootstrap::{apply_initial_attributes, attach};
use retrodesk_web::site::bridge::{CONTENT_CHANGED, ContentDetail, SWITCH_CONTENT_REQUESTED};
use retrodesk_web::storage::LocalPrefs;
use retrodesk_web::timer::sleep_ms;
use retrodesk_web::a11y;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn clear_prefs() {
    let mut prefs = LocalPrefs::detect();
    let _ = prefs.remove(THEME_KEY);
    let _ = prefs.remove(CONTENT_KEY);
}

fn element(tag: &str, id: &str) -> HtmlElement {
    let doc = dom::document().expect("document");
    let el = doc.create_element(tag).expect("create element");
    el.set_id(id);
    doc.body()
        .expect("body")
        .append_child(&el)
        .expect("append element");
    el.dyn_into::<HtmlElement>().expect("html element")
}

fn key_event(key: &str, shift: bool) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event")
}

fn active_id() -> Option<String> {
    dom::active_html_element().map(|el| el.id())
}

#[wasm_bindgen_test]
fn local_storage_round_trips_preferences() {
    clear_prefs();
    let mut prefs = LocalPrefs::detect();
    assert!(prefs.is_persistent());
    prefs.set(THEME_KEY, "dark").expect("write theme");
    assert_eq!(LocalPrefs::detect().get(THEME_KEY).as_deref(), Some("dark"));
    prefs.remove(THEME_KEY).expect("remove theme");
    assert_eq!(prefs.get(THEME_KEY), None);
}

#[wasm_bindgen_test]
async fn announcements_clear_themselves() {
    let doc = dom::document().expect("document");
    let selector = format!(".{ANNOUNCEMENT_CLASS}");
    let before = doc.query_selector_all(&selector).expect("query").length();

    assert!(announce(&Announcement::assertive("Desktop ready"), 50));
    let node = doc
        .query_selector(&selector)
        .expect("query")
        .expect("announcement node");
    assert_eq!(node.get_attribute("aria-live").as_deref(), Some("assertive"));
    assert_eq!(
        doc.query_selector_all(&selector).expect("query").length(),
        before + 1
    );

    sleep_ms(150).await.expect("sleep");
    assert_eq!(
        doc.query_selector_all(&selector).expect("query").length(),
        before
    );
}

#[wasm_bindgen_test]
fn skip_target_gets_temporary_tabindex() {
    let target = element("div", "skip-target");
    assert!(a11y::focus_skip_target("skip-target"));
    assert_eq!(active_id().as_deref(), Some("skip-target"));
    assert_eq!(target.get_attribute("tabindex").as_deref(), Some("-1"));

    target.blur().expect("blur");
    assert_eq!(target.get_attribute("tabindex"), None);
    assert!(!a11y::focus_skip_target("no-such-target"));
    target.remove();
}

#[wasm_bindgen_test]
fn focus_trap_wraps_at_both_ends() {
    let container = element("div", "trap");
    container.set_inner_html(
        r#"<button id="trap-first">one</button><a id="trap-mid" href="/x">two</a><button id="trap-last">three</button>"#,
    );
    let _trap = a11y::trap_focus(&container).expect("trap listener");

    let last = dom::html_element_by_id("trap-last").expect("last");
    last.focus().expect("focus last");
    last.dispatch_event(&key_event("Tab", false)).expect("dispatch");
    assert_eq!(active_id().as_deref(), Some("trap-first"));

    let first = dom::html_element_by_id("trap-first").expect("first");
    first.dispatch_event(&key_event("Tab", true)).expect("dispatch");
    assert_eq!(active_id().as_deref(), Some("trap-last"));
    container.remove();
}

#[wasm_bindgen_test]
fn keyboard_flag_follows_input_device() {
    let escapes = Rc::new(RefCell::new(0));
    let _helpers = {
        let escapes = Rc::clone(&escapes);
        a11y::install_document_helpers(move || *escapes.borrow_mut() += 1)
    };
    let doc = dom::document().expect("document");
    doc.dispatch_event(&key_event("Tab", false)).expect("dispatch");
    assert!(dom::body_has_class("keyboard-navigation"));

    let mouse = web_sys::MouseEvent::new("mousedown").expect("mouse event");
    doc.dispatch_event(&mouse).expect("dispatch");
    assert!(!dom::body_has_class("keyboard-navigation"));

    doc.dispatch_event(&key_event("Escape", false)).expect("dispatch");
    assert_eq!(*escapes.borrow(), 1);
}

#[wasm_bindgen_test]
fn attach_applies_stored_state_and_honours_page_requests() {
    clear_prefs();
    let mut prefs = LocalPrefs::detect();
    prefs.set(THEME_KEY, "dark").expect("write theme");
    prefs.set(CONTENT_KEY, "easy-read").expect("write content");

    let handle = SiteHandle::from_environment();
    let wiring = attach(&handle);
    let body = dom::body().expect("body");
    assert_eq!(body.get_attribute("data-content").as_deref(), Some("easy-read"));
    assert_eq!(body.get_attribute("data-theme").as_deref(), Some("hicontrast"));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let doc = dom::document().expect("document");
    let _watcher = {
        let seen = Rc::clone(&seen);
        Listener::new(&doc, CONTENT_CHANGED, move |event| {
            if let Some(custom) = event.dyn_ref::<CustomEvent>()
                && let Ok(detail) = serde_wasm_bindgen::from_value::<ContentDetail>(custom.detail())
            {
                seen.borrow_mut().push(detail.content);
            }
        })
    };

    let init = CustomEventInit::new();
    let detail = serde_wasm_bindgen::to_value(&ContentDetail {
        content: ContentMode::Standard,
    })
    .expect("detail");
    init.set_detail(&detail);
    let request =
        CustomEvent::new_with_event_init_dict(SWITCH_CONTENT_REQUESTED, &init).expect("event");
    doc.dispatch_event(&request).expect("dispatch");

    assert_eq!(handle.snapshot().content, ContentMode::Standard);
    assert_eq!(handle.snapshot().theme, Theme::Dark);
    assert_eq!(body.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(*seen.borrow(), vec![ContentMode::Standard]);

    drop(wiring);
    doc.dispatch_event(&request).expect("dispatch");
    assert_eq!(seen.borrow().len(), 1);
    clear_prefs();
}

#[wasm_bindgen_test]
fn custom_buttons_activate_on_enter_and_space() {
    let _helpers = a11y::install_document_helpers(|| {});
    let custom = element("div", "custom-button");
    custom.set_attribute("role", "button").expect("role");
    custom.set_tab_index(0);
    let native = element("button", "native-button");

    let clicks = Rc::new(RefCell::new(Vec::new()));
    let _custom_clicks = {
        let clicks = Rc::clone(&clicks);
        Listener::new(&custom, "click", move |_| clicks.borrow_mut().push("custom"))
    };
    let _native_clicks = {
        let clicks = Rc::clone(&clicks);
        Listener::new(&native, "click", move |_| clicks.borrow_mut().push("native"))
    };

    let enter = key_event("Enter", false);
    custom.dispatch_event(&enter).expect("dispatch");
    assert!(!enter.default_prevented());
    let space = key_event(" ", false);
    custom.dispatch_event(&space).expect("dispatch");
    assert!(space.default_prevented());
    assert_eq!(*clicks.borrow(), vec!["custom", "custom"]);

    native.dispatch_event(&key_event("Enter", false)).expect("dispatch");
    assert_eq!(clicks.borrow().len(), 2);

    let other = key_event("a", false);
    custom.dispatch_event(&other).expect("dispatch");
    assert_eq!(clicks.borrow().len(), 2);
    custom.remove();
    native.remove();
}

#[wasm_bindgen_test]
fn stored_easy_read_paints_high_contrast_before_render() {
    clear_prefs();
    let mut prefs = LocalPrefs::detect();
    prefs.set(THEME_KEY, "dark").expect("write theme");
    prefs.set(CONTENT_KEY, "easy-read").expect("write content");
    let body = dom::body().expect("body");
    body.remove_attribute("data-theme").expect("reset theme");
    body.remove_attribute("data-content").expect("reset content");

    apply_initial_attributes();
    assert_eq!(body.get_attribute("data-theme").as_deref(), Some("hicontrast"));
    assert_eq!(body.get_attribute("data-content").as_deref(), Some("easy-read"));

    prefs.remove(CONTENT_KEY).expect("remove content");
    apply_initial_attributes();
    assert_eq!(body.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(body.get_attribute("data-content").as_deref(), Some("standard"));
    clear_prefs();
}

#[wasm_bindgen_test]
async fn folder_grid_arrow_keys_move_the_tab_stop() {
    let root = element("div", "folder-grid-root");
    let folders = ["Rider", "Contact", "Press"]
        .iter()
        .map(|label| FolderLink {
            label: (*label).to_string(),
            href: format!("#{}", label.to_lowercase()),
            description: format!("{label} folder"),
        })
        .collect();
    let app = yew::Renderer::<FolderGrid>::with_root_and_props(
        root.clone().into(),
        folder_grid::Props { folders },
    )
    .render();
    sleep_ms(20).await.expect("sleep");

    let links = root.query_selector_all("a.folder").expect("query");
    assert_eq!(links.length(), 3);
    let link = |i: u32| -> HtmlElement {
        links
            .get(i)
            .expect("folder link")
            .dyn_into::<HtmlElement>()
            .expect("html element")
    };
    assert_eq!(link(0).get_attribute("tabindex").as_deref(), Some("0"));

    let first = link(0);
    first.focus().expect("focus first");
    let down = key_event("ArrowDown", false);
    first.dispatch_event(&down).expect("dispatch");
    assert!(down.default_prevented());
    sleep_ms(20).await.expect("sleep");

    let second = link(1);
    let active = dom::active_html_element().expect("focused element");
    let second_node: &web_sys::Node = &second;
    assert!(active.is_same_node(Some(second_node)));
    assert_eq!(second.get_attribute("tabindex").as_deref(), Some("0"));
    assert_eq!(
        root.query_selector_all(r#"[tabindex="0"]"#)
            .expect("query")
            .length(),
        1
    );

    second.dispatch_event(&key_event("End", false)).expect("dispatch");
    sleep_ms(20).await.expect("sleep");
    assert_eq!(link(2).get_attribute("tabindex").as_deref(), Some("0"));

    app.destroy();
    root.remove();
}
