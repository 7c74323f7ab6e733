//! Shared site state for the component tree.
//!
//! [`SiteRuntime`] owns the [`SiteState`] and the [`EventBus`]. Components
//! reach it through [`SiteProvider`] / [`use_site`]; browser wiring lives in
//! [`bootstrap`].
use crate::media;
use crate::storage::LocalPrefs;
use retrodesk_core::events::{EventBus, SiteEvent, SubscriptionId, Transition, dispatch};
use retrodesk_core::prefs::MemoryPrefs;
use retrodesk_core::state::{SiteSnapshot, SiteState};
use retrodesk_core::system::SystemPreferences;
use retrodesk_core::theme::{CycleDirection, Theme};
use retrodesk_core::config::SiteConfig;
use std::cell::RefCell;
use std::ops::Deref;
use std::rc::{Rc, Weak};
use yew::prelude::*;

pub mod bootstrap;
pub mod bridge;

pub type WebState = SiteState<LocalPrefs>;

#[derive(Debug)]
pub struct SiteRuntime {
    state: RefCell<WebState>,
    bus: RefCell<EventBus>,
    config: SiteConfig,
}

impl SiteRuntime {
    #[must_use]
    pub fn new(state: WebState, config: SiteConfig) -> Self {
        Self {
            state: RefCell::new(state),
            bus: RefCell::new(EventBus::new()),
            config,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SiteSnapshot {
        self.state.borrow().snapshot()
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn is_theme_disabled(&self, theme: Theme) -> bool {
        self.state.borrow().is_theme_disabled(theme)
    }

    pub fn subscribe(&self, handler: impl Fn(&SiteEvent) + 'static) -> SubscriptionId {
        self.bus.borrow_mut().subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bus.borrow_mut().unsubscribe(id)
    }

    /// Run one state operation and publish what it produced.
    ///
    /// The state borrow ends before any subscriber runs, so handlers may read
    /// the runtime or start another update.
    pub fn update(&self, op: impl FnOnce(&mut WebState) -> Transition) -> Transition {
        let transition = {
            let mut state = self.state.borrow_mut();
            op(&mut state)
        };
        self.publish(transition.events());
        transition
    }

    pub fn publish(&self, events: &[SiteEvent]) {
        if events.is_empty() {
            return;
        }
        let handlers = self.bus.borrow().handlers();
        dispatch(&handlers, events);
    }
}

/// Cheap shared handle to a [`SiteRuntime`].
#[derive(Debug, Clone)]
pub struct SiteHandle(Rc<SiteRuntime>);

impl SiteHandle {
    #[must_use]
    pub fn new(runtime: SiteRuntime) -> Self {
        Self(Rc::new(runtime))
    }

    /// Runtime over a plain in-memory store; used by SSR and tests.
    #[must_use]
    pub fn in_memory(prefs: MemoryPrefs, system: SystemPreferences) -> Self {
        let state = SiteState::new(LocalPrefs::from(prefs), system);
        Self::new(SiteRuntime::new(state, SiteConfig::shared().clone()))
    }

    /// Runtime backed by `localStorage` and the live media queries.
    #[must_use]
    pub fn from_environment() -> Self {
        let state = SiteState::new(LocalPrefs::detect(), media::detect_system());
        Self::new(SiteRuntime::new(state, SiteConfig::shared().clone()))
    }

    #[must_use]
    pub fn downgrade(&self) -> Weak<SiteRuntime> {
        Rc::downgrade(&self.0)
    }

    pub fn on_select_theme(&self) -> Callback<Theme> {
        let handle = self.clone();
        Callback::from(move |theme: Theme| {
            handle.update(|s| s.select_theme(theme));
        })
    }

    pub fn on_cycle_theme(&self) -> Callback<(Theme, CycleDirection)> {
        let handle = self.clone();
        Callback::from(move |(from, direction): (Theme, CycleDirection)| {
            handle.update(|s| s.cycle_theme(from, direction));
        })
    }

    pub fn on_toggle_content(&self) -> Callback<()> {
        let handle = self.clone();
        Callback::from(move |()| {
            handle.update(WebState::toggle_content);
        })
    }
}

impl Deref for SiteHandle {
    type Target = SiteRuntime;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for SiteHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// What components read: the handle for dispatching and the snapshot that
/// was current at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContext {
    pub handle: SiteHandle,
    pub snapshot: SiteSnapshot,
}

#[derive(Properties, PartialEq)]
pub struct SiteProviderProps {
    /// Runtime to expose; defaults to one built from the browser environment.
    #[prop_or_default]
    pub handle: Option<SiteHandle>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SiteProvider)]
pub fn site_provider(props: &SiteProviderProps) -> Html {
    let handle = {
        let provided = props.handle.clone();
        use_memo((), move |()| provided.unwrap_or_else(SiteHandle::from_environment))
    };
    let handle = (*handle).clone();
    let snapshot = {
        let handle = handle.clone();
        use_state_eq(move || handle.snapshot())
    };

    {
        let snapshot = snapshot.clone();
        use_effect_with(handle.clone(), move |handle| {
            let weak = handle.downgrade();
            let subscription = handle.subscribe(move |event| {
                if event.changes_state()
                    && let Some(runtime) = weak.upgrade()
                {
                    snapshot.set(runtime.snapshot());
                }
            });
            #[cfg(target_arch = "wasm32")]
            let wiring = bootstrap::attach(handle);
            let handle = handle.clone();
            move || {
                #[cfg(target_arch = "wasm32")]
                drop(wiring);
                handle.unsubscribe(subscription);
            }
        });
    }

    let context = SiteContext {
        handle,
        snapshot: *snapshot,
    };
    html! {
        <ContextProvider<SiteContext> {context}>
            { for props.children.iter() }
        </ContextProvider<SiteContext>>
    }
}

/// Site context from the nearest [`SiteProvider`].
///
/// Outside a provider this falls back to a private in-memory runtime so a
/// component can still render on its own.
#[hook]
pub fn use_site() -> SiteContext {
    let context = use_context::<SiteContext>();
    let fallback = use_memo(context.is_none(), |&missing| missing.then(standalone_handle));
    match context {
        Some(context) => context,
        None => {
            let handle = (*fallback).clone().unwrap_or_else(standalone_handle);
            SiteContext {
                snapshot: handle.snapshot(),
                handle,
            }
        }
    }
}

fn standalone_handle() -> SiteHandle {
    SiteHandle::in_memory(MemoryPrefs::new(), SystemPreferences::default())
}
