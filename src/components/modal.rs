//! Composer modal controller.
//!
//! DESIGN
//! ======
//! Lifecycle decisions live in [`ModalState`]; this controller applies them to
//! `[data-modal="composer"]` and schedules the transition timers. Escape and
//! the focus trap consult the `hidden` class rather than the state enum, so a
//! modal shown or hidden by other scripts still behaves.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Node};

use crate::config::{FOCUSABLE_SELECTOR, Timings, UiConfig};
use crate::error::UiError;
use crate::state::modal::{CloseSettle, ModalState, TabMove, trap_tab};
use crate::state::reveal::REVEAL_CLASS;
use crate::util::dom;

const HIDDEN_CLASS: &str = "hidden";
const SHOWN_CLASSES: &[&str] = &["opacity-100"];
const FADED_CLASSES: &[&str] = &["opacity-0"];
const BODY_OPEN_CLASS: &str = "spill-modal-open";
const CONTENT_SELECTOR: &str = ".bubble-surface";
const CONTENT_OPEN_CLASSES: &[&str] = &[REVEAL_CLASS, "spring-transition"];
const OVERLAY_SELECTOR: &str = "[data-modal-overlay]";

#[derive(Clone)]
pub struct ModalController {
    inner: Rc<Inner>,
}

struct Inner {
    doc: Document,
    modal: Element,
    timings: Timings,
    state: RefCell<ModalState<Element>>,
}

impl ModalController {
    /// Bind to the page's modal. Returns `None` when the page has no modal.
    pub fn attach(doc: &Document, config: &UiConfig) -> Result<Option<Self>, UiError> {
        let Some(modal) = doc.query_selector(config.modal_selector)? else {
            log::debug!("no modal on page");
            return Ok(None);
        };
        dom::set_attr(&modal, "aria-hidden", if dom::has_class(&modal, HIDDEN_CLASS) { "true" } else { "false" })?;

        let ctl = Self {
            inner: Rc::new(Inner {
                doc: doc.clone(),
                modal: modal.clone(),
                timings: config.timings,
                state: RefCell::new(ModalState::default()),
            }),
        };

        let on_escape = ctl.clone();
        dom::listen(&*dom::window()?, "keydown", move |ev| {
            let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key_ev.key() == "Escape" && on_escape.is_visible() {
                dom::report("modal escape", on_escape.close());
            }
        })?;

        let on_tab = ctl.clone();
        dom::listen(&modal, "keydown", move |ev| {
            if let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() {
                dom::report("modal focus trap", on_tab.trap_focus(key_ev));
            }
        })?;

        Ok(Some(ctl))
    }

    fn is_visible(&self) -> bool {
        !dom::has_class(&self.inner.modal, HIDDEN_CLASS)
    }

    pub fn contains(&self, el: &Element) -> bool {
        let node: &Node = el;
        self.inner.modal.contains(Some(node))
    }

    /// Whether `target` sits on this modal's backdrop.
    pub fn is_overlay(&self, target: &Element) -> Result<bool, UiError> {
        Ok(dom::closest(target, OVERLAY_SELECTOR)?.is_some_and(|overlay| self.contains(&overlay)))
    }

    /// Focusable, enabled descendants in document order, as of now.
    fn focusables(&self) -> Result<Vec<Element>, UiError> {
        Ok(dom::query_all_in(&self.inner.modal, FOCUSABLE_SELECTOR)?
            .into_iter()
            .filter(|el| !dom::is_disabled(el))
            .collect())
    }

    fn content(&self) -> Result<Option<Element>, UiError> {
        dom::query_in(&self.inner.modal, CONTENT_SELECTOR)
    }

    pub fn open(&self, trigger: Option<Element>) -> Result<(), UiError> {
        let previously_focused = dom::active_element(&self.inner.doc);
        let opened = self.inner.state.borrow_mut().begin_open(previously_focused, trigger.clone());
        let Some(epoch) = opened else {
            log::debug!("modal already open");
            return Ok(());
        };

        let modal = &self.inner.modal;
        dom::remove_classes(modal, &[HIDDEN_CLASS])?;
        dom::remove_classes(modal, FADED_CLASSES)?;
        dom::add_classes(modal, SHOWN_CLASSES)?;
        dom::add_classes(&*dom::body(&self.inner.doc)?, &[BODY_OPEN_CLASS])?;
        if let Some(content) = self.content()? {
            dom::add_classes(&content, CONTENT_OPEN_CLASSES)?;
            dom::set_attr(&content, "aria-live", "polite")?;
        }
        dom::set_attr(modal, "aria-hidden", "false")?;
        if let Some(trigger) = &trigger {
            dom::set_attr(trigger, "aria-expanded", "true")?;
        }

        let ctl = self.clone();
        dom::after(self.inner.timings.modal_focus_ms, move || {
            dom::report("modal open", ctl.settle_open(epoch));
        });
        Ok(())
    }

    fn settle_open(&self, epoch: u64) -> Result<(), UiError> {
        let settled = self.inner.state.borrow_mut().finish_open(epoch);
        if !settled {
            return Ok(());
        }
        match self.focusables()?.first() {
            Some(first) => dom::focus(first),
            None => Ok(()),
        }
    }

    pub fn close(&self) -> Result<(), UiError> {
        let started = self.inner.state.borrow_mut().begin_close();
        let Some(ticket) = started else {
            return Ok(());
        };

        let modal = &self.inner.modal;
        dom::remove_classes(modal, SHOWN_CLASSES)?;
        dom::add_classes(modal, FADED_CLASSES)?;
        dom::set_attr(modal, "aria-hidden", "true")?;
        dom::remove_classes(&*dom::body(&self.inner.doc)?, &[BODY_OPEN_CLASS])?;
        if let Some(trigger) = &ticket.trigger {
            dom::set_attr(trigger, "aria-expanded", "false")?;
        }

        let ctl = self.clone();
        let epoch = ticket.epoch;
        dom::after(self.inner.timings.modal_close_ms, move || {
            dom::report("modal close", ctl.settle_close(epoch));
        });
        Ok(())
    }

    fn settle_close(&self, epoch: u64) -> Result<(), UiError> {
        let settled = self.inner.state.borrow_mut().finish_close(epoch);
        let CloseSettle::Hidden { restore_to } = settled else {
            return Ok(());
        };

        dom::add_classes(&self.inner.modal, &[HIDDEN_CLASS])?;
        if let Some(content) = self.content()? {
            dom::remove_classes(&content, &[REVEAL_CLASS])?;
        }
        match restore_to {
            Some(el) if dom::can_focus(&el) => dom::focus(&el),
            _ => Ok(()),
        }
    }

    fn trap_focus(&self, ev: &KeyboardEvent) -> Result<(), UiError> {
        if ev.key() != "Tab" || !self.is_visible() {
            return Ok(());
        }
        let items = self.focusables()?;
        let active = self.inner.doc.active_element();
        let target = match trap_tab(&items, active.as_ref(), ev.shift_key()) {
            TabMove::PassThrough => return Ok(()),
            TabMove::Suppress => None,
            TabMove::WrapToFirst => items.first(),
            TabMove::WrapToLast => items.last(),
        };
        ev.prevent_default();
        match target {
            Some(el) => dom::focus(el),
            None => Ok(()),
        }
    }
}
