//! Single delegated click handler for the page body.
//!
//! DESIGN
//! ======
//! Every `[data-action]` control is resolved to an [`Action`] here and routed
//! to the controller that owns it. Controllers never register their own body
//! click listeners. Backdrop and ripple clicks are routed by marker as well.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent};

use crate::action::{ACTION_SELECTOR, Action};
use crate::components::feed_toggle::FeedToggle;
use crate::components::modal::ModalController;
use crate::components::ripple;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::error::UiError;
use crate::util::dom;
use crate::util::ripple_math::RIPPLE_SELECTOR;

pub struct Dispatcher {
    doc: Document,
    theme: Option<ThemeSwitcher>,
    modal: Option<ModalController>,
    feed: FeedToggle,
}

impl Dispatcher {
    pub fn new(doc: &Document, theme: Option<ThemeSwitcher>, modal: Option<ModalController>, feed: FeedToggle) -> Self {
        Self { doc: doc.clone(), theme, modal, feed }
    }

    /// Register the body click listener for the lifetime of the page.
    pub fn attach(self) -> Result<(), UiError> {
        let body = dom::body(&self.doc)?;
        dom::listen(&body, "click", move |ev| self.on_click(&ev))
    }

    fn on_click(&self, ev: &Event) {
        let Some(target) = dom::event_element(ev) else {
            return;
        };

        match dom::closest(&target, ACTION_SELECTOR) {
            Ok(Some(control)) => self.route(ev, &control),
            Ok(None) => {}
            Err(err) => log::warn!("action lookup: {err}"),
        }

        if let Some(modal) = &self.modal {
            match modal.is_overlay(&target) {
                Ok(true) => dom::report("modal backdrop", modal.close()),
                Ok(false) => {}
                Err(err) => log::warn!("backdrop lookup: {err}"),
            }
        }

        if let Some(mouse) = ev.dyn_ref::<MouseEvent>() {
            match dom::closest(&target, RIPPLE_SELECTOR) {
                Ok(Some(host)) => dom::report(
                    "ripple",
                    ripple::spawn(&self.doc, &host, f64::from(mouse.client_x()), f64::from(mouse.client_y())),
                ),
                Ok(None) => {}
                Err(err) => log::warn!("ripple lookup: {err}"),
            }
        }
    }

    fn route(&self, ev: &Event, control: &Element) {
        let Some(action) = control.get_attribute("data-action").as_deref().and_then(Action::parse) else {
            return;
        };

        match action {
            Action::ToggleTheme => {
                if let Some(theme) = &self.theme {
                    match theme.toggle() {
                        Ok(next) => log::debug!("theme -> {}", next.as_str()),
                        Err(err) => log::warn!("theme toggle: {err}"),
                    }
                }
            }
            Action::OpenComposer => {
                if let Some(modal) = &self.modal {
                    dom::report("modal open", modal.open(Some(control.clone())));
                }
            }
            Action::CloseComposer => {
                if let Some(modal) = self.modal.as_ref().filter(|modal| modal.contains(control)) {
                    dom::report("modal close", modal.close());
                }
            }
            Action::Clap | Action::Refill => {
                ev.prevent_default();
                if let Some(kind) = action.interaction_kind() {
                    if let Err(err) = self.feed.toggle(control, kind) {
                        log::warn!("{} toggle: {err}", kind.as_str());
                    }
                }
            }
        }
    }
}
