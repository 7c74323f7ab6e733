use super::{SiteHandle, WebState, bridge};
use crate::dom::{self, Listener};
use crate::media::{self, MediaListener};
use crate::storage::LocalPrefs;
use crate::{a11y, announce};
use retrodesk_core::content::ContentMode;
use retrodesk_core::events::{SiteEvent, SubscriptionId};
use retrodesk_core::state::{initial_content, initial_theme};
use retrodesk_core::system::{DARK_SCHEME_QUERY, MORE_CONTRAST_QUERY, REDUCED_MOTION_QUERY};
use retrodesk_core::theme::Theme;

const CRITICAL_STYLE_ID: &str = "retrodesk-a11y-css";

pub fn write_state_attributes(theme: Theme, content: ContentMode) {
    dom::set_body_attribute("data-theme", theme.as_str());
    dom::set_body_attribute("data-content", content.as_str());
}

fn inject_critical_css() {
    let Some(doc) = dom::document() else {
        return;
    };
    if doc.get_element_by_id(CRITICAL_STYLE_ID).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else {
        return;
    };
    style.set_id(CRITICAL_STYLE_ID);
    style.set_text_content(Some(a11y::visible_focus_css()));
    let _ = head.append_child(&style);
}

/// Write the stored theme and content onto `<body>` before the first render
/// so the page never flashes the default look.
pub fn apply_initial_attributes() {
    let prefs = LocalPrefs::detect();
    let system = media::detect_system();
    let content = initial_content(&prefs);
    let theme = if content.forces_high_contrast() {
        Theme::HighContrast
    } else {
        initial_theme(&prefs, system)
    };
    inject_critical_css();
    write_state_attributes(theme, content);
    a11y::apply_system_flags(system);
}

fn sync_dom(event: &SiteEvent, clear_after_ms: i32) {
    match event {
        SiteEvent::ThemeChanged { theme, .. } => {
            dom::set_body_attribute("data-theme", theme.as_str());
        }
        SiteEvent::ContentChanged { mode } => {
            dom::set_body_attribute("data-content", mode.as_str());
        }
        SiteEvent::SystemChanged(system) => a11y::apply_system_flags(*system),
        SiteEvent::Announce(announcement) => {
            announce::announce(announcement, clear_after_ms);
        }
        SiteEvent::ContentSwitchRequested { .. } | SiteEvent::EscapePressed => {}
    }
    bridge::dispatch(event);
}

/// Browser listeners tied to one runtime. Dropping it detaches everything.
pub struct SiteWiring {
    handle: SiteHandle,
    subscription: SubscriptionId,
    _listeners: Vec<Listener>,
    _media: Vec<MediaListener>,
}

impl Drop for SiteWiring {
    fn drop(&mut self) {
        self.handle.unsubscribe(self.subscription);
    }
}

fn watch_media(handle: &SiteHandle) -> Vec<MediaListener> {
    let dark = {
        let runtime = handle.downgrade();
        MediaListener::watch(DARK_SCHEME_QUERY, move |prefers_dark| {
            if let Some(runtime) = runtime.upgrade() {
                runtime.update(|s| s.system_color_scheme_changed(prefers_dark));
            }
        })
    };
    let motion = {
        let runtime = handle.downgrade();
        MediaListener::watch(REDUCED_MOTION_QUERY, move |enabled| {
            if let Some(runtime) = runtime.upgrade() {
                runtime.update(|s| s.set_reduced_motion(enabled));
            }
        })
    };
    let contrast = {
        let runtime = handle.downgrade();
        MediaListener::watch(MORE_CONTRAST_QUERY, move |enabled| {
            if let Some(runtime) = runtime.upgrade() {
                runtime.update(|s| s.set_more_contrast(enabled));
            }
        })
    };
    [dark, motion, contrast].into_iter().flatten().collect()
}

/// Connect a runtime to the page and run its initial state pass.
pub fn attach(handle: &SiteHandle) -> SiteWiring {
    let clear_after_ms = handle.config().announce_clear_ms;
    let subscription = handle.subscribe(move |event| sync_dom(event, clear_after_ms));

    let media = watch_media(handle);

    let mut listeners = {
        let runtime = handle.downgrade();
        a11y::install_document_helpers(move || {
            if let Some(runtime) = runtime.upgrade() {
                runtime.publish(&[SiteEvent::EscapePressed]);
            }
        })
    };
    listeners.extend(bridge::listen_for_content_requests(handle));

    let transition = handle.update(WebState::initialize);
    let snapshot = handle.snapshot();
    log::info!(
        "site attached: theme={} content={} ({} events, {} media listeners)",
        snapshot.theme,
        snapshot.content,
        transition.events().len(),
        media.len()
    );

    SiteWiring {
        handle: handle.clone(),
        subscription,
        _listeners: listeners,
        _media: media,
    }
}
