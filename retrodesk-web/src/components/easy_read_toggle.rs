use crate::components::icon::{Glyph, Icon};
use crate::site::use_site;
use retrodesk_core::palette::{IconVisual, Paint};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub group_hovered: bool,
}

#[function_component(EasyReadToggle)]
pub fn easy_read_toggle(p: &Props) -> Html {
    let site = use_site();
    let hovered = use_state_eq(|| false);
    let state = site.snapshot.content_button();

    let onclick = {
        let toggle = site.handle.on_toggle_content();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let style = site
        .handle
        .config()
        .palette(site.snapshot.theme)
        .and_then(|palette| {
            palette.icon_style(
                Paint::Stroke,
                IconVisual {
                    active: state.active,
                    hovered: *hovered,
                    group_hovered: p.group_hovered,
                    disabled: false,
                },
            )
        });

    html! {
        <button
            type="button"
            id="easy-read-toggle"
            class={classes!("easy-read-btn", state.active.then_some("active"))}
            aria-pressed={state.active.to_string()}
            aria-label={state.aria_label}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            <Icon glyph={Glyph::Book} {style} />
            <span class="easy-read-btn__label">{ state.label }</span>
        </button>
    }
}
