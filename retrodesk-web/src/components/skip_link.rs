use crate::a11y::focus_skip_target;
use retrodesk_core::a11y::skip_target_id;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or(AttrValue::from("#main"))]
    pub href: AttrValue,
    #[prop_or(AttrValue::from("Skip to main content"))]
    pub label: AttrValue,
}

#[function_component(SkipLink)]
pub fn skip_link(p: &Props) -> Html {
    let onclick = {
        let href = p.href.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = skip_target_id(&href)
                && focus_skip_target(id)
            {
                e.prevent_default();
            }
        })
    };
    html! {
        <a class="skip-link sr-only" href={p.href.clone()} {onclick}>{ p.label.clone() }</a>
    }
}
