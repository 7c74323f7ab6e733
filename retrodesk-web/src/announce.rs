//! Transient live-region announcements for screen readers.
use crate::{dom, timer};
use retrodesk_core::events::Announcement;

pub const ANNOUNCEMENT_CLASS: &str = "sr-announcement";
const OFFSCREEN_STYLE: &str = "position:absolute;left:-10000px;width:1px;height:1px;overflow:hidden;";

/// Append an off-screen `aria-live` node carrying the message and remove it
/// after `clear_after_ms`. Returns `false` when there is no document body.
pub fn announce(announcement: &Announcement, clear_after_ms: i32) -> bool {
    let Some(doc) = dom::document() else {
        return false;
    };
    let Some(body) = doc.body() else {
        return false;
    };
    let Ok(node) = doc.create_element("div") else {
        return false;
    };
    let _ = node.set_attribute("aria-live", announcement.politeness.as_str());
    let _ = node.set_attribute("class", ANNOUNCEMENT_CLASS);
    let _ = node.set_attribute("style", OFFSCREEN_STYLE);
    node.set_text_content(Some(&announcement.message));
    if body.append_child(&node).is_err() {
        return false;
    }
    log::debug!("announced: {}", announcement.message);
    timer::schedule(clear_after_ms, move || node.remove());
    true
}
