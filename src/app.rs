//! WASM entry point: logging, then every controller wired to the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is static markup. This module runs once when the module starts,
//! waits for the DOM if it is still parsing, and attaches each controller.
//! A controller that fails to attach is logged and skipped; the rest of the
//! page keeps working.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent};

use crate::components::dispatcher::Dispatcher;
use crate::components::feed_toggle::FeedToggle;
use crate::components::modal::ModalController;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::components::{nav, page_load, ripple, scroll_reveal};
use crate::config::UiConfig;
use crate::error::UiError;
use crate::tokens::StyleTokens;
use crate::util::dom;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    dom::report("spill-ui start", mount(UiConfig::default()));
}

fn init_logging() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {err}");
    }
}

/// Attach every controller once the DOM is parsed.
pub fn mount(config: UiConfig) -> Result<(), UiError> {
    let doc = dom::document()?;
    if doc.ready_state() == "loading" {
        let ready = doc.clone();
        dom::listen(&doc, "DOMContentLoaded", move |_| initialize(&ready, &config))?;
    } else {
        initialize(&doc, &config);
    }
    Ok(())
}

fn optional<T>(context: &str, attached: Result<Option<T>, UiError>) -> Option<T> {
    attached.unwrap_or_else(|err| {
        log::warn!("{context}: {err}");
        None
    })
}

fn initialize(doc: &Document, config: &UiConfig) {
    dom::report("style tokens", StyleTokens::spill().publish());
    dom::report("page load", page_load::attach(doc, &config.timings));
    dom::report("nav", nav::attach(doc));
    dom::report("scroll reveal", scroll_reveal::attach(doc, &config.reveal));

    let theme = optional("theme switcher", ThemeSwitcher::attach(doc, config));
    let modal = optional("modal", ModalController::attach(doc, config));
    let feed = FeedToggle::new(config.timings.pulse_ms);
    dom::report("dispatcher", Dispatcher::new(doc, theme, modal, feed).attach());

    log::info!("spill-ui attached");
}

/// Re-run nav highlighting; exposed for page scripts that change the path.
#[wasm_bindgen(js_name = updateActiveNavItem)]
pub fn update_active_nav_item() {
    dom::report("nav refresh", dom::document().and_then(|doc| nav::refresh(&doc)));
}

/// Spawn a ripple on `host` for a click handled by page scripts.
#[wasm_bindgen(js_name = addRippleEffect)]
pub fn add_ripple_effect(host: &Element, event: &MouseEvent) {
    let spawned = dom::document().and_then(|doc| {
        ripple::spawn(&doc, host, f64::from(event.client_x()), f64::from(event.client_y()))
    });
    dom::report("ripple", spawned);
}
