//! Section scroll-spy and roving-tabindex keyboard navigation
use crate::config::SiteConfig;

/// Measured position of one page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Picks the section the reader is currently in.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    offset: f64,
    fallback: String,
}

impl ScrollSpy {
    #[must_use]
    pub fn new(offset: f64, fallback: impl Into<String>) -> Self {
        Self {
            offset,
            fallback: fallback.into(),
        }
    }

    #[must_use]
    pub fn from_config(cfg: &SiteConfig) -> Self {
        Self::new(cfg.scroll_spy_offset, cfg.default_section.clone())
    }

    /// Last section (in document order) whose top, minus the offset, has been
    /// scrolled past. Falls back to the configured default section.
    #[must_use]
    pub fn active_section<'a>(&'a self, scroll_y: f64, sections: &'a [SectionOffset]) -> &'a str {
        sections
            .iter()
            .rev()
            .find(|s| scroll_y >= s.top - self.offset)
            .map_or(self.fallback.as_str(), |s| s.id.as_str())
    }
}

/// Scroll position that brings a section top just under the fixed header.
#[must_use]
pub fn scroll_target_top(section_top: f64, offset: f64) -> f64 {
    (section_top - offset).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` to a movement for a group laid out along
    /// `orientation`.
    #[must_use]
    pub fn from_key(key: &str, orientation: Orientation) -> Option<Self> {
        let vertical = matches!(orientation, Orientation::Vertical | Orientation::Both);
        let horizontal = matches!(orientation, Orientation::Horizontal | Orientation::Both);
        match key {
            "ArrowDown" if vertical => Some(Self::Next),
            "ArrowUp" if vertical => Some(Self::Previous),
            "ArrowRight" if horizontal => Some(Self::Next),
            "ArrowLeft" if horizontal => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Roving tabindex over `len` items: exactly one item is tab-reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RovingGroup {
    len: usize,
    current: usize,
}

impl RovingGroup {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn tabindex(&self, index: usize) -> i32 {
        if index == self.current { 0 } else { -1 }
    }

    #[must_use]
    pub fn tabindexes(&self) -> Vec<i32> {
        (0..self.len).map(|i| self.tabindex(i)).collect()
    }

    /// Make `index` the tab stop (e.g. on click or focus). Out-of-range
    /// indices are ignored.
    pub const fn focus(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Move the tab stop; returns the newly focused index.
    pub const fn apply(&mut self, key: NavKey) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let next = match key {
            NavKey::Next => (self.current + 1) % self.len,
            NavKey::Previous => (self.current + self.len - 1) % self.len,
            NavKey::First => 0,
            NavKey::Last => self.len - 1,
        };
        self.current = next;
        Some(next)
    }

    /// Keep the tab stop valid after the item count changes.
    pub const fn resize(&mut self, len: usize) {
        self.len = len;
        if self.current >= len {
            self.current = if len == 0 { 0 } else { len - 1 };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("intro", 0.0),
            SectionOffset::new("stage", 800.0),
            SectionOffset::new("audio", 1600.0),
        ]
    }

    #[test]
    fn spy_uses_offset() {
        let spy = ScrollSpy::new(200.0, "intro");
        let s = sections();
        assert_eq!(spy.active_section(0.0, &s), "intro");
        assert_eq!(spy.active_section(599.0, &s), "intro");
        assert_eq!(spy.active_section(600.0, &s), "stage");
        assert_eq!(spy.active_section(5000.0, &s), "audio");
    }

    #[test]
    fn spy_falls_back_without_sections() {
        let spy = ScrollSpy::new(200.0, "intro");
        assert_eq!(spy.active_section(300.0, &[]), "intro");
        let late = [SectionOffset::new("stage", 900.0)];
        assert_eq!(spy.active_section(0.0, &late), "intro");
    }

    #[test]
    fn scroll_target_clamps_at_top() {
        assert!((scroll_target_top(500.0, 120.0) - 380.0).abs() < f64::EPSILON);
        assert!(scroll_target_top(40.0, 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn keys_respect_orientation() {
        assert_eq!(
            NavKey::from_key("ArrowDown", Orientation::Vertical),
            Some(NavKey::Next)
        );
        assert_eq!(NavKey::from_key("ArrowRight", Orientation::Vertical), None);
        assert_eq!(
            NavKey::from_key("ArrowLeft", Orientation::Horizontal),
            Some(NavKey::Previous)
        );
        assert_eq!(NavKey::from_key("End", Orientation::Both), Some(NavKey::Last));
        assert_eq!(NavKey::from_key("Tab", Orientation::Both), None);
    }

    #[test]
    fn roving_group_wraps() {
        let mut group = RovingGroup::new(3);
        assert_eq!(group.apply(NavKey::Previous), Some(2));
        assert_eq!(group.apply(NavKey::Next), Some(0));
        assert_eq!(group.apply(NavKey::Last), Some(2));
        assert_eq!(group.apply(NavKey::First), Some(0));
        assert_eq!(group.tabindexes(), vec![0, -1, -1]);
    }

    #[test]
    fn empty_group_is_inert() {
        let mut group = RovingGroup::new(0);
        assert_eq!(group.apply(NavKey::Next), None);
        assert!(!group.focus(0));
        assert!(group.tabindexes().is_empty());
    }

    #[test]
    fn resize_keeps_stop_in_range() {
        let mut group = RovingGroup::new(5);
        group.focus(4);
        group.resize(2);
        assert_eq!(group.current(), 1);
        assert_eq!(group.tabindexes(), vec![-1, 0]);
    }
}
