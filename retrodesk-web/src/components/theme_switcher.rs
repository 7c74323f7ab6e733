use crate::components::icon::{Glyph, Icon};
use crate::site::use_site;
use retrodesk_core::keys::{ThemeKeyAction, theme_key_action};
use retrodesk_core::palette::{IconVisual, Paint};
use retrodesk_core::theme::Theme;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Pointer is over the surrounding header group.
    #[prop_or_default]
    pub group_hovered: bool,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(p: &Props) -> Html {
    let site = use_site();
    let hovered = use_state_eq(|| None::<Theme>);
    let refs = use_memo((), |()| Theme::ALL.map(|_| NodeRef::default()));

    let palette = site.handle.config().palette(site.snapshot.theme).cloned();
    let on_select = site.handle.on_select_theme();
    let on_cycle = site.handle.on_cycle_theme();

    let buttons = site.snapshot.theme_buttons().into_iter().enumerate().map(|(idx, state)| {
        let theme = state.theme;
        let onclick = {
            let on_select = on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(theme))
        };
        let onkeydown = {
            let on_select = on_select.clone();
            let on_cycle = on_cycle.clone();
            let handle = site.handle.clone();
            let refs = refs.clone();
            Callback::from(move |e: KeyboardEvent| match theme_key_action(&e.key()) {
                Some(ThemeKeyAction::Activate) => {
                    e.prevent_default();
                    on_select.emit(theme);
                }
                Some(ThemeKeyAction::Cycle(direction)) => {
                    e.prevent_default();
                    on_cycle.emit((theme, direction));
                    let now = handle.snapshot().theme;
                    let target = Theme::ALL.iter().position(|t| *t == now);
                    if let Some(el) = target
                        .and_then(|i| refs.get(i))
                        .and_then(NodeRef::cast::<HtmlElement>)
                    {
                        let _ = el.focus();
                    }
                }
                None => {}
            })
        };
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(theme)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        let visual = IconVisual {
            active: state.active,
            hovered: *hovered == Some(theme),
            group_hovered: p.group_hovered,
            disabled: state.disabled,
        };
        let style = palette
            .as_ref()
            .and_then(|palette| palette.icon_style(Paint::Fill, visual));
        html! {
            <button
                type="button"
                ref={refs[idx].clone()}
                class={classes!("theme-btn", state.active.then_some("active"), state.disabled.then_some("disabled"))}
                data-theme={theme.as_str()}
                aria-label={theme.button_label()}
                aria-pressed={state.active.to_string()}
                aria-disabled={state.disabled.to_string()}
                title={state.title}
                {onclick}
                {onkeydown}
                {onmouseenter}
                {onmouseleave}
            >
                <Icon glyph={Glyph::for_theme(theme)} {style} />
                <span class="theme-btn__label">{ theme.label() }</span>
            </button>
        }
    });

    html! {
        <div class="theme-switcher" role="group" aria-label="Color theme">
            { for buttons }
        </div>
    }
}
