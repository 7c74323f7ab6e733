// Centralized keyboard mapping for theme buttons and page-wide shortcuts
use crate::theme::CycleDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKeyAction {
    Activate,
    Cycle(CycleDirection),
}

/// Keys handled while a theme button has focus.
#[must_use]
pub fn theme_key_action(key: &str) -> Option<ThemeKeyAction> {
    match key {
        "Enter" | " " => Some(ThemeKeyAction::Activate),
        "ArrowRight" => Some(ThemeKeyAction::Cycle(CycleDirection::Forward)),
        "ArrowLeft" => Some(ThemeKeyAction::Cycle(CycleDirection::Backward)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalKey {
    Escape,
    /// Show focus rings from now on.
    Tab,
    /// Enter/Space on a custom `role="button"` element. Space must not
    /// scroll the page.
    Activate { prevent_scroll: bool },
}

/// Document-level keydown classification.
///
/// `custom_button` is true for elements with `role="button"` that are not
/// native `<button>`s; native buttons already activate on Enter/Space.
#[must_use]
pub fn global_key(key: &str, custom_button: bool) -> Option<GlobalKey> {
    match key {
        "Escape" => Some(GlobalKey::Escape),
        "Tab" => Some(GlobalKey::Tab),
        "Enter" if custom_button => Some(GlobalKey::Activate {
            prevent_scroll: false,
        }),
        " " if custom_button => Some(GlobalKey::Activate {
            prevent_scroll: true,
        }),
        _ => None,
    }
}
