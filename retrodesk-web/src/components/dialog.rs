use crate::a11y::{focus_first, restore_focus, trap_focus};
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static DIALOG_IDS: AtomicUsize = AtomicUsize::new(0);

/// While `open`, focus moves into the container and Tab cycles inside it.
/// Closing hands focus back to `return_focus_id`.
#[hook]
pub fn use_focus_trap(open: bool, container_ref: NodeRef, return_focus_id: Option<AttrValue>) {
    use_effect_with(open, move |open| {
        let trap = if *open {
            container_ref.cast::<web_sys::HtmlElement>().and_then(|el| {
                if !focus_first(&el) {
                    let _ = el.focus();
                }
                trap_focus(&el)
            })
        } else {
            None
        };
        let was_open = *open;
        move || {
            drop(trap);
            if was_open && let Some(id) = return_focus_id {
                restore_focus(&id);
            }
        }
    });
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &Props) -> Html {
    let dialog_id = use_state(|| DIALOG_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();
    use_focus_trap(
        props.open,
        container_ref.clone(),
        props.return_focus_id.clone(),
    );

    if !props.open {
        return Html::default();
    }

    let container_id = format!("dialog-{}", *dialog_id);
    let title_id = format!("dialog-title-{}", *dialog_id);
    let desc_id = props
        .description
        .as_ref()
        .map(|_| format!("dialog-desc-{}", *dialog_id));

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let stop_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                id={container_id}
                class="dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone()}
                tabindex="-1"
                onkeydown={on_keydown}
                onclick={stop_click}
                ref={container_ref}
            >
                <div class="dialog__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="dialog__close" aria-label="Close dialog" onclick={on_close}>
                        {"×"}
                    </button>
                </div>
                { props.description.as_ref().zip(desc_id).map(|(desc, id)| html! {
                    <p {id} class="dialog__description">{ desc.clone() }</p>
                }).unwrap_or_default() }
                <div class="dialog__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
