//! Page-load reveal of `<main>` and elements marked to animate on ready.

use web_sys::Document;

use crate::config::Timings;
use crate::error::UiError;
use crate::state::reveal::{ANIMATE_ON_LOAD_SELECTOR, PAGE_READY_CLASS, REVEAL_CLASS};
use crate::util::dom;

pub fn attach(doc: &Document, timings: &Timings) -> Result<(), UiError> {
    if let Some(main) = doc.query_selector("main")? {
        dom::add_classes(&main, &[REVEAL_CLASS])?;
    }
    let ready = doc.clone();
    dom::after(timings.page_load_ms, move || {
        dom::report("page ready", reveal_marked(&ready));
    });
    Ok(())
}

fn reveal_marked(doc: &Document) -> Result<(), UiError> {
    for el in dom::query_all(doc, ANIMATE_ON_LOAD_SELECTOR)? {
        dom::add_classes(&el, &[REVEAL_CLASS])?;
    }
    dom::add_classes(&*dom::body(doc)?, &[PAGE_READY_CLASS])
}
