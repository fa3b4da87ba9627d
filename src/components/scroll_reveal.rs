//! One-shot fade-in of `[data-animate]` elements as they scroll into view.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealOptions;
use crate::error::UiError;
use crate::state::reveal::{ANIMATE_SELECTOR, REVEAL_CLASS, RevealSet};
use crate::util::dom;

pub fn attach(doc: &Document, options: &RevealOptions) -> Result<(), UiError> {
    let targets = Rc::new(dom::query_all(doc, ANIMATE_SELECTOR)?);
    if targets.is_empty() {
        return Ok(());
    }

    let mut revealed = RevealSet::default();
    let arena = Rc::clone(&targets);
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = arena.iter().position(|el| *el == target) else {
                continue;
            };
            if revealed.on_intersection(index, entry.is_intersecting()) {
                dom::report("scroll reveal", dom::add_classes(&target, &[REVEAL_CLASS]));
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();

    for target in targets.iter() {
        observer.observe(target);
    }
    log::debug!("observing {} animated elements", targets.len());
    Ok(())
}
