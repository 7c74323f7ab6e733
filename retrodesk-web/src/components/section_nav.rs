use crate::components::icon::{Glyph, Icon};
use crate::components::roving::use_roving_focus;
use crate::site::use_site;
use retrodesk_core::config::SectionCopy;
use retrodesk_core::nav::Orientation;
use retrodesk_core::palette::{IconVisual, Paint};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: AttrValue,
    pub label: AttrValue,
}

impl From<&SectionCopy> for NavItem {
    fn from(section: &SectionCopy) -> Self {
        Self {
            id: AttrValue::from(section.id.clone()),
            label: AttrValue::from(section.label.clone()),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<NavItem>,
    /// Id of the section the scroll spy currently reports.
    pub active: AttrValue,
    pub on_navigate: Callback<AttrValue>,
    #[prop_or_default]
    pub group_hovered: bool,
}

#[function_component(SectionNav)]
pub fn section_nav(p: &Props) -> Html {
    let site = use_site();
    let roving = use_roving_focus(p.items.len(), Orientation::Horizontal);
    let hovered = use_state_eq(|| None::<usize>);
    let palette = site.handle.config().palette(site.snapshot.theme).cloned();

    let icons = p.items.iter().enumerate().map(|(idx, item)| {
        let active = item.id == p.active;
        let onclick = {
            let on_navigate = p.on_navigate.clone();
            let id = item.id.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(id.clone()))
        };
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(idx)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        let style = palette.as_ref().and_then(|palette| {
            palette.icon_style(
                Paint::Stroke,
                IconVisual {
                    active,
                    hovered: *hovered == Some(idx),
                    group_hovered: p.group_hovered,
                    disabled: false,
                },
            )
        });
        html! {
            <li>
                <button
                    type="button"
                    ref={roving.node_ref(idx)}
                    class={classes!("nav-icon", active.then_some("active"))}
                    data-section={item.id.clone()}
                    tabindex={roving.tabindex(idx).to_string()}
                    aria-current={active.then_some("location")}
                    {onclick}
                    onfocus={roving.onfocus(idx)}
                    onkeydown={roving.onkeydown(idx)}
                    {onmouseenter}
                    {onmouseleave}
                >
                    <Icon glyph={Glyph::Section} {style} />
                    <span class="nav-icon__label">{ item.label.clone() }</span>
                </button>
            </li>
        }
    });

    html! {
        <nav class="section-nav" aria-label="Sections">
            <ul role="list">{ for icons }</ul>
        </nav>
    }
}
