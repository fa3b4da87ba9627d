//! Click ripple appended to `[data-ripple]` hosts.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::UiError;
use crate::util::dom;
use crate::util::ripple_math::{Bounds, RIPPLE_CLASS, Ripple};

/// Append a ripple span to `host`, centred on the click at client `(x, y)`.
pub fn spawn(doc: &Document, host: &Element, client_x: f64, client_y: f64) -> Result<(), UiError> {
    let rect = host.get_bounding_client_rect();
    let bounds = Bounds { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() };
    let ripple = Ripple::at(bounds, client_x, client_y);

    let span = doc.create_element("span")?;
    if let Some(html) = span.dyn_ref::<HtmlElement>() {
        let style = html.style();
        for (property, value) in ripple.style() {
            style.set_property(property, &value)?;
        }
    }
    dom::add_classes(&span, &[RIPPLE_CLASS])?;
    host.append_child(&span)?;
    Ok(())
}
