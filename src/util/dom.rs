//! Thin `web-sys` helpers used by every controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers address markup through attribute selectors and only need a
//! handful of DOM operations. Wrapping them here turns thrown JS values into
//! [`UiError`] so callers can use `?`.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body(doc: &Document) -> Result<HtmlElement, UiError> {
    doc.body().ok_or(UiError::NoBody)
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// All elements in the document matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    Ok(elements(&doc.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, UiError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

pub fn query_in(root: &Element, selector: &str) -> Result<Option<Element>, UiError> {
    Ok(root.query_selector(selector)?)
}

pub fn closest(el: &Element, selector: &str) -> Result<Option<Element>, UiError> {
    Ok(el.closest(selector)?)
}

/// Element an event was dispatched to, if it is an element.
pub fn event_element(ev: &Event) -> Option<Element> {
    ev.target().and_then(|t| t.dyn_ref::<Element>().cloned())
}

pub fn add_classes(el: &Element, classes: &[&str]) -> Result<(), UiError> {
    let list = el.class_list();
    for class in classes {
        list.add_1(class)?;
    }
    Ok(())
}

pub fn remove_classes(el: &Element, classes: &[&str]) -> Result<(), UiError> {
    let list = el.class_list();
    for class in classes {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Add `classes` when `on`, remove them otherwise.
pub fn set_classes(el: &Element, classes: &[&str], on: bool) -> Result<(), UiError> {
    if on { add_classes(el, classes) } else { remove_classes(el, classes) }
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_attr(el: &Element, name: &str, value: &str) -> Result<(), UiError> {
    Ok(el.set_attribute(name, value)?)
}

pub fn is_disabled(el: &Element) -> bool {
    el.has_attribute("disabled")
}

/// Whether `el` can still take focus: attached to the document and enabled.
pub fn can_focus(el: &Element) -> bool {
    el.is_connected() && !is_disabled(el) && el.dyn_ref::<HtmlElement>().is_some()
}

pub fn focus(el: &Element) -> Result<(), UiError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.focus()?;
    }
    Ok(())
}

pub fn active_element(doc: &Document) -> Option<Element> {
    doc.active_element().filter(|el| el.dyn_ref::<HtmlElement>().is_some())
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds. Not cancellable.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}

/// Log a failed controller step without propagating it to the page.
pub fn report(context: &str, result: Result<(), UiError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
