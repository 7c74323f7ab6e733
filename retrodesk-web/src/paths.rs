//! Deployment base path handling.
//!
//! `PUBLIC_URL` (read at compile time) lets the site live under a
//! subdirectory such as `/retro`; without it everything is root-anchored.

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// URL for a static asset such as the desktop background.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join(public_url(), relative)
}

/// Router basename, or `None` when the site is served from `/`.
#[must_use]
pub fn router_base() -> Option<String> {
    base_of(public_url())
}

fn join(base: &str, relative: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let relative = relative.trim_start_matches("./").trim_start_matches('/');
    format!("{base}/{relative}")
}

fn base_of(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
