//! Typed site events and the subscription bus that fans them out
use crate::content::ContentMode;
use crate::system::SystemPreferences;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::rc::Rc;

/// `aria-live` level of an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

/// Message for screen-reader users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub message: String,
    pub politeness: Politeness,
}

impl Announcement {
    #[must_use]
    pub fn polite(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            politeness: Politeness::Polite,
        }
    }

    #[must_use]
    pub fn assertive(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            politeness: Politeness::Assertive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteEvent {
    ThemeChanged { theme: Theme, persisted: bool },
    /// Emitted when a theme change has to pull the page out of a content mode
    /// before it can apply.
    ContentSwitchRequested { mode: ContentMode },
    ContentChanged { mode: ContentMode },
    SystemChanged(SystemPreferences),
    Announce(Announcement),
    EscapePressed,
}

impl SiteEvent {
    /// Whether the event alters what the page renders.
    #[must_use]
    pub const fn changes_state(&self) -> bool {
        matches!(
            self,
            Self::ThemeChanged { .. } | Self::ContentChanged { .. } | Self::SystemChanged(_)
        )
    }
}

/// Ordered events produced by one state operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    events: SmallVec<[SiteEvent; 4]>,
}

impl Transition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SiteEvent) {
        self.events.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[SiteEvent] {
        &self.events
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn announcements(&self) -> impl Iterator<Item = &Announcement> {
        self.events.iter().filter_map(|event| match event {
            SiteEvent::Announce(a) => Some(a),
            _ => None,
        })
    }

    /// Last theme applied by this transition, if any.
    #[must_use]
    pub fn final_theme(&self) -> Option<Theme> {
        self.events.iter().rev().find_map(|event| match event {
            SiteEvent::ThemeChanged { theme, .. } => Some(*theme),
            _ => None,
        })
    }
}

impl IntoIterator for Transition {
    type Item = SiteEvent;
    type IntoIter = smallvec::IntoIter<[SiteEvent; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl From<SiteEvent> for Transition {
    fn from(event: SiteEvent) -> Self {
        let mut t = Self::new();
        t.push(event);
        t
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type Handler = Rc<dyn Fn(&SiteEvent)>;

/// Observer registry.
///
/// Handlers are called in subscription order. [`EventBus::handlers`] hands out
/// a snapshot so callers holding the bus in a `RefCell` can release the borrow
/// before dispatching.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl Fn(&SiteEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Rc::new(handler)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _)| *sub != id);
        self.handlers.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    #[must_use]
    pub fn handlers(&self) -> Vec<Handler> {
        self.handlers.iter().map(|(_, h)| Rc::clone(h)).collect()
    }

    pub fn publish(&self, events: &[SiteEvent]) {
        dispatch(&self.handlers(), events);
    }
}

/// Deliver every event to every handler, event-major.
pub fn dispatch(handlers: &[Handler], events: &[SiteEvent]) {
    for event in events {
        for handler in handlers {
            handler(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}
