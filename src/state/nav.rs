//! Active navigation entry derived from the current path.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const NAV_ITEM_SELECTOR: &str = ".nav-item";
pub const ACTIVE_CLASSES: &[&str] = &["text-blue-400", "font-semibold"];
pub const INACTIVE_CLASSES: &[&str] = &["text-neutral-400"];
pub const HOVER_CLASS: &str = "scale-105";

/// A link is active when it has a non-empty `href` contained in `path`.
pub fn is_active_link(path: &str, href: Option<&str>) -> bool {
    href.is_some_and(|href| !href.is_empty() && path.contains(href))
}

/// Active flags for a set of link hrefs, in input order.
pub fn active_flags<'a>(path: &str, hrefs: impl IntoIterator<Item = Option<&'a str>>) -> Vec<bool> {
    hrefs.into_iter().map(|href| is_active_link(path, href)).collect()
}
