//! Roving-tabindex hook shared by the folder grid and the section nav.
use retrodesk_core::nav::{NavKey, Orientation, RovingGroup};
use std::rc::Rc;
use web_sys::{FocusEvent, HtmlElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Clone)]
pub struct RovingFocus {
    group: UseStateHandle<RovingGroup>,
    refs: Rc<Vec<NodeRef>>,
    orientation: Orientation,
}

#[hook]
pub fn use_roving_focus(len: usize, orientation: Orientation) -> RovingFocus {
    let group = use_state_eq(|| RovingGroup::new(len));
    let refs = use_memo(len, |len| {
        (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });
    {
        let group = group.clone();
        use_effect_with(len, move |len| {
            if group.len() != *len {
                let mut resized = *group;
                resized.resize(*len);
                group.set(resized);
            }
            || {}
        });
    }
    RovingFocus {
        group,
        refs,
        orientation,
    }
}

impl RovingFocus {
    #[must_use]
    pub fn tabindex(&self, index: usize) -> i32 {
        self.group.tabindex(index)
    }

    #[must_use]
    pub fn node_ref(&self, index: usize) -> NodeRef {
        self.refs.get(index).cloned().unwrap_or_default()
    }

    /// Keep the roving stop on whatever item took focus (click or Tab).
    pub fn onfocus(&self, index: usize) -> Callback<FocusEvent> {
        let group = self.group.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = *group;
            if next.focus(index) {
                group.set(next);
            }
        })
    }

    pub fn onkeydown(&self, index: usize) -> Callback<KeyboardEvent> {
        let group = self.group.clone();
        let refs = Rc::clone(&self.refs);
        let orientation = self.orientation;
        Callback::from(move |e: KeyboardEvent| {
            let Some(key) = NavKey::from_key(&e.key(), orientation) else {
                return;
            };
            e.prevent_default();
            let mut next = *group;
            next.focus(index);
            let Some(target) = next.apply(key) else {
                return;
            };
            group.set(next);
            if let Some(el) = refs.get(target).and_then(NodeRef::cast::<HtmlElement>) {
                let _ = el.focus();
            }
        })
    }
}
