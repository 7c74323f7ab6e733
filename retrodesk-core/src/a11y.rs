//! Platform-free accessibility rules: focus trapping, skip links and the
//! fixed announcement texts.

/// Elements a focus trap cycles through.
pub const FOCUSABLE_QUERY: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex='-1'])";

pub const LAYOUT_ADJUSTED_MESSAGE: &str = "Layout adjusted for smaller screen";

/// Where Tab should move focus inside a trap, if it must be redirected.
///
/// `len` is the number of focusable elements, `active` the index of the
/// focused one among them and `active_inside` whether focus is inside the
/// container at all. `None` lets the browser handle the key.
#[must_use]
pub const fn focus_trap_target(
    len: usize,
    active: Option<usize>,
    shift: bool,
    active_inside: bool,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if !active_inside {
        return Some(0);
    }
    let last = len - 1;
    match active {
        Some(0) if shift => Some(last),
        Some(idx) if !shift && idx == last => Some(0),
        _ => None,
    }
}

/// Element id a skip link points at (`"#main"` -> `"main"`).
#[must_use]
pub fn skip_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[must_use]
pub fn desktop_loaded_message(folder_count: usize) -> String {
    let noun = if folder_count == 1 { "folder" } else { "folders" };
    format!("Desktop interface loaded with {folder_count} navigation {noun}")
}
