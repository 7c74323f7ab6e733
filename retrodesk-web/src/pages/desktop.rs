use crate::components::dialog::Dialog;
use crate::components::folder_grid::FolderGrid;
use crate::components::skip_link::SkipLink;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::dom::{self, Listener};
use crate::paths::asset_path;
use crate::site::{SiteRuntime, use_site};
use crate::timer::{self, Debouncer};
use crate::announce;
use retrodesk_core::a11y::{LAYOUT_ADJUSTED_MESSAGE, desktop_loaded_message};
use retrodesk_core::config::SiteConfig;
use retrodesk_core::events::Announcement;
use std::rc::Rc;
use yew::prelude::*;

pub const HELP_BUTTON_ID: &str = "keyboard-help-btn";

const SHORTCUTS: [(&str, &str); 5] = [
    ("Tab / Shift+Tab", "Move between the header, folders and dialogs"),
    ("Arrow keys", "Move between folders or navigation icons"),
    ("Home / End", "Jump to the first or last folder"),
    ("Left / Right on a theme button", "Cycle through the colour themes"),
    ("Escape", "Close this dialog"),
];

fn background_style(config: &SiteConfig, use_fallback: bool) -> Option<String> {
    if use_fallback || config.background_image.is_empty() {
        (!config.fallback_background.is_empty())
            .then(|| format!("background: {}", config.fallback_background))
    } else {
        Some(format!(
            "background-image: url('{}')",
            asset_path(&config.background_image)
        ))
    }
}

/// Announcement for a viewport that crossed into the compact layout.
fn layout_announcement(config: &SiteConfig, width: f64, height: f64) -> Option<Announcement> {
    config
        .is_compact_viewport(width, height)
        .then(|| Announcement::assertive(LAYOUT_ADJUSTED_MESSAGE))
}

fn announce_layout_if_compact(runtime: &SiteRuntime) {
    let Some((width, height)) = dom::viewport_size() else {
        return;
    };
    log::debug!("viewport resized to {width}x{height}");
    let config = runtime.config();
    let Some(announcement) = layout_announcement(config, width, height) else {
        return;
    };
    let clear_after_ms = config.announce_clear_ms;
    timer::schedule(config.layout_announce_delay_ms, move || {
        announce::announce(&announcement, clear_after_ms);
    });
}

#[function_component(Desktop)]
pub fn desktop() -> Html {
    let site = use_site();
    let config = site.handle.config();
    let help_open = use_state_eq(|| false);
    let use_fallback = use_state_eq(|| false);

    {
        let folder_count = config.folders.len();
        let clear_after_ms = config.announce_clear_ms;
        use_effect_with((), move |()| {
            announce::announce(
                &Announcement::assertive(desktop_loaded_message(folder_count)),
                clear_after_ms,
            );
            || {}
        });
    }

    {
        let use_fallback = use_fallback.clone();
        let image = config.background_image.clone();
        use_effect_with(image, move |image| {
            if !image.is_empty()
                && let Ok(loader) = web_sys::HtmlImageElement::new()
            {
                let src = asset_path(image);
                dom::listen_once(&loader, "error", move || {
                    log::warn!("desktop background failed to load, using fallback gradient");
                    use_fallback.set(true);
                });
                loader.set_src(&src);
            }
            || {}
        });
    }

    {
        let runtime = site.handle.downgrade();
        let debounce_ms = config.resize_debounce_ms;
        use_effect_with((), move |()| {
            let debouncer = Rc::new(Debouncer::new(debounce_ms));
            let listener = dom::window().and_then(|win| {
                let debouncer = Rc::clone(&debouncer);
                Listener::new(&win, "resize", move |_| {
                    let runtime = runtime.clone();
                    debouncer.call(move || {
                        if let Some(runtime) = runtime.upgrade() {
                            announce_layout_if_compact(&runtime);
                        }
                    });
                })
            });
            move || {
                drop(listener);
                debouncer.cancel();
            }
        });
    }

    let open_help = {
        let help_open = help_open.clone();
        Callback::from(move |_: MouseEvent| help_open.set(true))
    };
    let close_help = {
        let help_open = help_open.clone();
        Callback::from(move |()| help_open.set(false))
    };

    html! {
        <div
            class={classes!("desktop-container", use_fallback.then_some("fallback-background"))}
            style={background_style(config, *use_fallback)}
        >
            <SkipLink />
            <header class="desktop-header" role="banner">
                <h1 class="desktop-title">{ "Retro Desktop" }</h1>
                <ThemeSwitcher />
                <button
                    id={HELP_BUTTON_ID}
                    type="button"
                    class="help-btn"
                    aria-haspopup="dialog"
                    onclick={open_help}
                >
                    { "Keyboard help" }
                </button>
            </header>
            <main id="main" class="desktop">
                <FolderGrid folders={config.folders.clone()} />
            </main>
            <Dialog
                open={*help_open}
                title="Keyboard shortcuts"
                description="Everything on this page works without a mouse."
                on_close={close_help}
                return_focus_id={AttrValue::from(HELP_BUTTON_ID)}
            >
                <dl class="shortcut-list">
                    { for SHORTCUTS.iter().map(|(keys, action)| html! {
                        <>
                            <dt><kbd>{ *keys }</kbd></dt>
                            <dd>{ *action }</dd>
                        </>
                    }) }
                </dl>
            </Dialog>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrodesk_core::events::Politeness;

    #[test]
    fn background_prefers_image_until_it_fails() {
        let config = SiteConfig::shared();
        let style = background_style(config, false).unwrap_or_default();
        assert!(style.starts_with("background-image: url('"));
        assert!(style.contains("mainbg.png"));

        let fallback = background_style(config, true).unwrap_or_default();
        assert!(fallback.contains("linear-gradient"));
    }

    #[test]
    fn missing_image_uses_fallback_directly() {
        let config = SiteConfig {
            background_image: String::new(),
            fallback_background: "#000".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            background_style(&config, false).as_deref(),
            Some("background: #000")
        );
    }

    #[test]
    fn compact_viewport_is_announced_assertively() {
        let config = SiteConfig::shared();
        let announcement = layout_announcement(config, 320.0, 480.0).expect("compact");
        assert_eq!(announcement.politeness, Politeness::Assertive);
        assert_eq!(announcement.message, LAYOUT_ADJUSTED_MESSAGE);
        assert!(layout_announcement(config, 1920.0, 1080.0).is_none());
    }
}
