//! Navigation highlighting and hover scaling for `.nav-item` links.

use web_sys::Document;

use crate::error::UiError;
use crate::state::nav::{ACTIVE_CLASSES, HOVER_CLASS, INACTIVE_CLASSES, NAV_ITEM_SELECTOR, active_flags};
use crate::util::dom;

/// Highlight now, on every `hashchange`, and bind hover scaling.
pub fn attach(doc: &Document) -> Result<(), UiError> {
    refresh(doc)?;

    for item in dom::query_all(doc, NAV_ITEM_SELECTOR)? {
        let entered = item.clone();
        dom::listen(&item, "mouseenter", move |_| {
            dom::report("nav hover", dom::add_classes(&entered, &[HOVER_CLASS]));
        })?;
        let left = item.clone();
        dom::listen(&item, "mouseleave", move |_| {
            dom::report("nav hover", dom::remove_classes(&left, &[HOVER_CLASS]));
        })?;
    }

    let on_hash = doc.clone();
    dom::listen(&*dom::window()?, "hashchange", move |_| {
        dom::report("nav refresh", refresh(&on_hash));
    })?;
    Ok(())
}

/// Mark every nav link active or inactive for the current path.
pub fn refresh(doc: &Document) -> Result<(), UiError> {
    let path = dom::window()?.location().pathname()?;
    let items = dom::query_all(doc, NAV_ITEM_SELECTOR)?;
    let hrefs: Vec<Option<String>> = items.iter().map(|item| item.get_attribute("href")).collect();
    let flags = active_flags(&path, hrefs.iter().map(Option::as_deref));

    for (item, active) in items.iter().zip(flags) {
        dom::set_classes(item, ACTIVE_CLASSES, active)?;
        dom::set_classes(item, INACTIVE_CLASSES, !active)?;
    }
    log::debug!("nav refreshed for {path}");
    Ok(())
}
