use futures::executor::block_on;
use retrodesk_core::config::{FolderLink, SiteConfig};
use retrodesk_core::content::ContentMode;
use retrodesk_core::prefs::{CONTENT_KEY, MemoryPrefs, THEME_KEY};
use retrodesk_core::state::SiteState;
use retrodesk_core::system::SystemPreferences;
use retrodesk_web::components::content_blocks::ContentBlocks;
use retrodesk_web::components::dialog::Dialog;
use retrodesk_web::components::folder_grid::FolderGrid;
use retrodesk_web::components::section_nav::{NavItem, SectionNav};
use retrodesk_web::components::skip_link::{Props as SkipLinkProps, SkipLink};
use retrodesk_web::components::theme_switcher::{Props as ThemeSwitcherProps, ThemeSwitcher};
use retrodesk_web::pages::desktop::Desktop;
use retrodesk_web::pages::not_found::NotFound;
use retrodesk_web::pages::rider::Rider;
use retrodesk_web::site::{SiteHandle, SiteProvider, use_site};
use yew::html::ChildrenRenderer;
use yew::prelude::*;
use yew::LocalServerRenderer;

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Switcher,
    Desktop,
    Rider,
}

#[derive(Properties, PartialEq)]
struct HarnessProps {
    handle: SiteHandle,
    view: View,
}

#[function_component(Harness)]
fn harness(p: &HarnessProps) -> Html {
    let body = match p.view {
        View::Switcher => html! { <ThemeSwitcher /> },
        View::Desktop => html! { <Desktop /> },
        View::Rider => html! { <Rider /> },
    };
    html! {
        <SiteProvider handle={p.handle.clone()}>
            { body }
        </SiteProvider>
    }
}

fn initialized(prefs: MemoryPrefs) -> SiteHandle {
    let handle = SiteHandle::in_memory(prefs, SystemPreferences::default());
    handle.update(SiteState::initialize);
    handle
}

fn render(handle: SiteHandle, view: View) -> String {
    block_on(LocalServerRenderer::<Harness>::with_props(HarnessProps { handle, view }).render())
}

#[test]
fn theme_switcher_marks_the_current_theme() {
    let handle = initialized(MemoryPrefs::new().with_entry(THEME_KEY, "dark"));
    let html = render(handle, View::Switcher);
    assert_eq!(html.matches("theme-btn").count(), 6); // class + label span per button
    assert!(html.contains(r#"data-theme="dark""#));
    assert!(html.contains("theme-btn active"));
    assert!(!html.contains("theme-btn disabled"));
    // theme icons are recoloured through their fill
    assert!(html.contains("fill: #CCFF00"));
    assert!(html.contains("fill: #9B7BB5"));
    assert!(!html.contains("stroke: #"));
}

#[test]
fn easy_read_disables_light_and_dark_buttons() {
    let handle = initialized(MemoryPrefs::new().with_entry(CONTENT_KEY, "easy-read"));
    let html = render(handle, View::Switcher);
    assert_eq!(html.matches("theme-btn disabled").count(), 2);
    assert_eq!(
        html.matches("Theme selection disabled in Easy Read mode").count(),
        2
    );
    // high contrast keeps stylesheet colours
    assert!(!html.contains("stroke: #"));
    assert!(!html.contains("fill: #"));
}

#[test]
fn switcher_outside_a_provider_uses_defaults() {
    let html = block_on(LocalServerRenderer::<ThemeSwitcher>::with_props(yew::props!(ThemeSwitcherProps {})).render());
    assert!(html.contains(r#"role="group""#));
    assert!(html.contains(r#"aria-label="Light theme""#));
    assert!(html.contains(r#"aria-label="High contrast theme""#));
}

#[derive(Properties, PartialEq)]
struct SourceProps {
    expected: Option<SiteHandle>,
}

#[function_component(SiteSource)]
fn site_source(p: &SourceProps) -> Html {
    let site = use_site();
    let from_provider = p.expected.as_ref() == Some(&site.handle);
    html! { <span data-provider={from_provider.to_string()}>{ site.snapshot.theme.as_str() }</span> }
}

#[function_component(ProvidedSource)]
fn provided_source() -> Html {
    let handle = use_memo((), |()| initialized(MemoryPrefs::new().with_entry(THEME_KEY, "dark")));
    html! {
        <SiteProvider handle={(*handle).clone()}>
            <SiteSource expected={Some((*handle).clone())} />
        </SiteProvider>
    }
}

#[test]
fn use_site_prefers_the_provider_handle() {
    let html = block_on(LocalServerRenderer::<ProvidedSource>::new().render());
    assert!(html.contains(r#"data-provider="true""#));
    assert!(html.contains("dark"));
}

#[test]
fn use_site_falls_back_to_a_standalone_runtime() {
    let props = SourceProps { expected: None };
    let html = block_on(LocalServerRenderer::<SiteSource>::with_props(props).render());
    assert!(html.contains(r#"data-provider="false""#));
    assert!(html.contains("light"));
}

#[test]
fn folder_grid_has_a_single_tab_stop() {
    let folders = SiteConfig::shared().folders.clone();
    let count = folders.len();
    let props = retrodesk_web::components::folder_grid::Props { folders };
    let html = block_on(LocalServerRenderer::<FolderGrid>::with_props(props).render());
    assert_eq!(html.matches(r#"tabindex="0""#).count(), 1);
    assert_eq!(html.matches(r#"tabindex="-1""#).count(), count - 1);
    assert!(html.contains(r#"class="folder""#));
}

#[test]
fn folder_grid_renders_descriptions() {
    let props = retrodesk_web::components::folder_grid::Props {
        folders: vec![FolderLink {
            label: "Rider".to_string(),
            href: "/rider".to_string(),
            description: "The rider document".to_string(),
        }],
    };
    let html = block_on(LocalServerRenderer::<FolderGrid>::with_props(props).render());
    assert!(html.contains(r#"href="/rider""#));
    assert!(html.contains(r#"aria-describedby="folder-desc-0""#));
    assert!(html.contains("The rider document"));
}

#[test]
fn section_nav_marks_the_active_section() {
    let items: Vec<NavItem> = SiteConfig::shared()
        .sections
        .iter()
        .map(NavItem::from)
        .collect();
    let props = retrodesk_web::components::section_nav::Props {
        active: items[1].id.clone(),
        items,
        on_navigate: Callback::noop(),
        group_hovered: false,
    };
    let html = block_on(LocalServerRenderer::<SectionNav>::with_props(props).render());
    assert_eq!(html.matches(r#"aria-current="location""#).count(), 1);
    assert!(html.contains("nav-icon active"));
}

#[test]
fn only_the_current_content_block_is_active() {
    let props = retrodesk_web::components::content_blocks::Props {
        content: ContentMode::EasyRead,
        sections: SiteConfig::shared().sections.clone(),
    };
    let html = block_on(LocalServerRenderer::<ContentBlocks>::with_props(props).render());
    assert!(html.contains("content-version easy-read-content active"));
    assert!(html.contains("content-version standard-content"));
    assert!(!html.contains("standard-content active"));
    assert!(html.contains(r#"id="easy-read-intro""#));
    assert!(html.contains(r#"id="standard-intro""#));
}

#[test]
fn dialog_renders_only_when_open() {
    let open = retrodesk_web::components::dialog::Props {
        open: true,
        title: AttrValue::from("Keyboard shortcuts"),
        on_close: Callback::noop(),
        description: Some(AttrValue::from("Desc")),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Dialog>::with_props(open.clone()).render());
    assert!(html.contains(r#"role="dialog""#));
    assert!(html.contains(r#"aria-modal="true""#));
    assert!(html.contains("Desc"));

    let closed = retrodesk_web::components::dialog::Props {
        open: false,
        ..open
    };
    let html = block_on(LocalServerRenderer::<Dialog>::with_props(closed).render());
    assert!(!html.contains("dialog-backdrop"));
}

#[test]
fn skip_link_targets_main() {
    let html = block_on(LocalServerRenderer::<SkipLink>::with_props(yew::props!(SkipLinkProps {})).render());
    assert!(html.contains(r##"href="#main""##));
    assert!(html.contains("Skip to main content"));
}

#[test]
fn desktop_lists_folders_and_help() {
    let html = render(initialized(MemoryPrefs::new()), View::Desktop);
    assert!(html.contains("desktop-container"));
    assert!(html.contains(r#"id="main""#));
    assert!(html.contains("keyboard-help-btn"));
    for folder in &SiteConfig::shared().folders {
        assert!(html.contains(&folder.label));
    }
    // help dialog starts closed
    assert!(!html.contains(r#"role="dialog""#));
}

#[test]
fn rider_in_easy_read_shows_the_simplified_copy() {
    let handle = initialized(MemoryPrefs::new().with_entry(CONTENT_KEY, "easy-read"));
    let html = render(handle, View::Rider);
    assert!(html.contains("nav-and-themes"));
    assert!(html.contains("easy-read-content active"));
    assert!(html.contains("hard read"));
    assert!(html.contains("Switch to Standard version"));
    assert!(html.contains(r#"aria-pressed="true""#));
}

#[test]
fn rider_in_standard_offers_easy_read() {
    let html = render(initialized(MemoryPrefs::new()), View::Rider);
    assert!(html.contains("standard-content active"));
    assert!(html.contains("easy read"));
    assert!(html.contains("Switch to Easy Read version"));
}

#[test]
fn rider_header_paints_theme_fills_and_nav_strokes() {
    let html = render(initialized(MemoryPrefs::new()), View::Rider);
    let nav_start = html.find("section-nav").expect("section nav");
    let switcher_start = html.find("theme-switcher").expect("theme switcher");
    let nav = &html[nav_start..switcher_start];
    let switcher = &html[switcher_start..];
    assert!(nav.contains("stroke: #7B5B95"));
    assert!(!nav.contains("fill: #"));
    assert!(switcher.contains("fill: #CCFF00"));
    assert!(switcher.contains("fill: #7B5B95"));
}

#[test]
fn not_found_links_home() {
    let html = block_on(LocalServerRenderer::<NotFound>::new().render());
    assert!(html.contains("Page not found"));
    assert!(html.contains(r#"href="/""#));
}
