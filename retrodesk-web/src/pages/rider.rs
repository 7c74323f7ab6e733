use crate::components::content_blocks::{ContentBlocks, section_dom_id};
use crate::components::easy_read_toggle::EasyReadToggle;
use crate::components::section_nav::{NavItem, SectionNav};
use crate::components::skip_link::SkipLink;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::dom::{self, Listener};
use crate::site::{SiteRuntime, use_site};
use retrodesk_core::content::ContentMode;
use retrodesk_core::nav::{ScrollSpy, SectionOffset, scroll_target_top};
use std::rc::Weak;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

fn header_classes(group_hovered: bool) -> Classes {
    classes!("nav-and-themes", group_hovered.then_some("hover-state"))
}

/// Document offsets of the sections inside the visible content block.
fn measure_sections(content: ContentMode) -> Vec<SectionOffset> {
    let Some(doc) = dom::document() else {
        return Vec::new();
    };
    let selector = format!(".{} [data-section]", content.block_class());
    let Ok(nodes) = doc.query_selector_all(&selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| {
            let id = el.get_attribute("data-section")?;
            Some(SectionOffset::new(id, dom::document_top(&el)))
        })
        .collect()
}

fn spy_active_section(spy: &ScrollSpy, content: ContentMode) -> String {
    let sections = measure_sections(content);
    spy.active_section(dom::scroll_y(), &sections).to_string()
}

fn scroll_to_section(runtime: &Weak<SiteRuntime>, section: &str) {
    let Some(runtime) = runtime.upgrade() else {
        return;
    };
    let snapshot = runtime.snapshot();
    let id = section_dom_id(snapshot.content, section);
    let Some(el) = dom::document().and_then(|d| d.get_element_by_id(&id)) else {
        log::debug!("section #{id} not in the page");
        return;
    };
    let top = scroll_target_top(dom::document_top(&el), runtime.config().scroll_target_offset);
    dom::scroll_to(top, !snapshot.system.prefers_reduced_motion);
}

#[function_component(Rider)]
pub fn rider() -> Html {
    let site = use_site();
    let config = site.handle.config();
    let content = site.snapshot.content;
    let group_hovered = use_state_eq(|| false);
    let active = {
        let default_section = config.default_section.clone();
        use_state_eq(move || AttrValue::from(default_section))
    };

    {
        let active = active.clone();
        let spy = ScrollSpy::from_config(config);
        use_effect_with(content, move |content| {
            let content = *content;
            active.set(AttrValue::from(spy_active_section(&spy, content)));
            let listener = dom::window().and_then(|win| {
                Listener::new(&win, "scroll", move |_| {
                    active.set(AttrValue::from(spy_active_section(&spy, content)));
                })
            });
            move || drop(listener)
        });
    }

    let on_navigate = {
        let active = active.clone();
        let runtime = site.handle.downgrade();
        Callback::from(move |section: AttrValue| {
            scroll_to_section(&runtime, &section);
            active.set(section);
        })
    };
    let onmouseenter = {
        let group_hovered = group_hovered.clone();
        Callback::from(move |_: MouseEvent| group_hovered.set(true))
    };
    let onmouseleave = {
        let group_hovered = group_hovered.clone();
        Callback::from(move |_: MouseEvent| group_hovered.set(false))
    };

    let items: Vec<NavItem> = config.sections.iter().map(NavItem::from).collect();

    html! {
        <div class="rider-page">
            <SkipLink />
            <header
                class={header_classes(*group_hovered)}
                role="banner"
                {onmouseenter}
                {onmouseleave}
            >
                <SectionNav
                    {items}
                    active={(*active).clone()}
                    {on_navigate}
                    group_hovered={*group_hovered}
                />
                <ThemeSwitcher group_hovered={*group_hovered} />
                <EasyReadToggle group_hovered={*group_hovered} />
            </header>
            <main id="main" class="rider-content">
                <ContentBlocks {content} sections={config.sections.clone()} />
            </main>
        </div>
    }
}
