//! Clap/refill toggles on feed items.
//!
//! DESIGN
//! ======
//! The [`InteractionStore`] is authoritative. Markup is read once per scope to
//! seed it (pre-set active flag, recorded base, or the visible count text) and
//! is written afterwards only as the outward contract: `data-*-active`,
//! `data-*-base`, `data-base-count`, `data-count` and the rendered count.
//! A button outside any scope keeps its flag in `data-active` instead.
//!
//! Scopes without a `data-lit-id` get a key stamped into
//! `data-interaction-key` on first toggle, so lookups never scan.

use std::cell::{Cell, RefCell};

use web_sys::Element;

use crate::error::UiError;
use crate::state::interaction::{
    BUTTON_ACTIVE_ATTR, InteractionKind, InteractionStore, MarkupSeed, SCOPE_KEY_ATTR, ScopeKey, ToggleOutcome,
};
use crate::util::count_text::group_thousands;
use crate::util::dom;

const SCOPE_SELECTORS: [&str; 2] = ["[data-lit-id]", "[data-interaction-scope]"];
const ITEM_ID_ATTR: &str = "data-lit-id";
const COUNT_SELECTOR: &str = "span:last-child";
const ACTIVE_CLASS: &str = "is-active";
const PULSE_CLASSES: &[&str] = &["spring-transition", "scale-110"];
const PULSE_SCALE_CLASS: &str = "scale-110";

pub struct FeedToggle {
    store: RefCell<InteractionStore>,
    next_stamp: Cell<u64>,
    pulse_ms: u32,
    locale: Option<String>,
}

impl FeedToggle {
    pub fn new(pulse_ms: u32) -> Self {
        let locale = web_sys::window().and_then(|w| w.navigator().language());
        Self {
            store: RefCell::new(InteractionStore::default()),
            next_stamp: Cell::new(0),
            pulse_ms,
            locale,
        }
    }

    /// Toggle `kind` for the feed item enclosing `button`.
    pub fn toggle(&self, button: &Element, kind: InteractionKind) -> Result<ToggleOutcome, UiError> {
        let scope = resolve_scope(button)?;
        let holder = scope.as_ref().unwrap_or(button);
        let key = self.scope_key(holder)?;
        let count_el = dom::query_in(button, COUNT_SELECTOR)?;

        let outcome = self.store.borrow_mut().toggle(key, kind, || {
            let active = match &scope {
                Some(scope) => scope.get_attribute(kind.active_attr()),
                None => button.get_attribute(BUTTON_ACTIVE_ATTR),
            };
            let scope_base = scope.as_ref().and_then(|scope| scope.get_attribute(kind.base_attr()));
            let button_base = button.get_attribute("data-base-count");
            let button_count = button.get_attribute("data-count");
            let text = count_el.as_ref().and_then(|el| el.text_content());
            MarkupSeed {
                active: active.as_deref(),
                scope_base: scope_base.as_deref(),
                button_base: button_base.as_deref(),
                button_count: button_count.as_deref(),
                text: text.as_deref(),
            }
            .state()
        });

        let flag = if outcome.active { "true" } else { "false" };
        match &scope {
            Some(scope) => dom::set_attr(scope, kind.active_attr(), flag)?,
            None => dom::set_attr(button, BUTTON_ACTIVE_ATTR, flag)?,
        }
        if outcome.base_recorded {
            let base = outcome.base.to_string();
            if let Some(scope) = &scope {
                dom::set_attr(scope, kind.base_attr(), &base)?;
            }
            dom::set_attr(button, "data-base-count", &base)?;
        }
        dom::set_attr(button, "data-count", &outcome.count.to_string())?;
        if let Some(count_el) = &count_el {
            count_el.set_text_content(Some(&self.format_count(outcome.count)));
        }

        dom::set_classes(button, &[ACTIVE_CLASS], outcome.active)?;
        dom::set_classes(button, kind.active_classes(), outcome.active)?;
        dom::add_classes(button, PULSE_CLASSES)?;
        let pulsed = button.clone();
        dom::after(self.pulse_ms, move || {
            dom::report("feed pulse", dom::remove_classes(&pulsed, &[PULSE_SCALE_CLASS]));
        });

        log::debug!("{} -> active={} count={}", kind.as_str(), outcome.active, outcome.count);
        Ok(outcome)
    }

    fn scope_key(&self, holder: &Element) -> Result<ScopeKey, UiError> {
        let item_id = holder.get_attribute(ITEM_ID_ATTR);
        let stamped = holder.get_attribute(SCOPE_KEY_ATTR);
        if let Some(key) = ScopeKey::from_markup(item_id.as_deref(), stamped.as_deref()) {
            return Ok(key);
        }
        let stamp = format!("scope-{}", self.next_stamp.get());
        self.next_stamp.set(self.next_stamp.get() + 1);
        dom::set_attr(holder, SCOPE_KEY_ATTR, &stamp)?;
        Ok(ScopeKey::Stamped(stamp))
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_count(&self, count: u64) -> String {
        match &self.locale {
            Some(locale) => String::from(js_sys::Number::from(count as f64).to_locale_string(locale)),
            None => group_thousands(count),
        }
    }
}

fn resolve_scope(button: &Element) -> Result<Option<Element>, UiError> {
    for selector in SCOPE_SELECTORS {
        if let Some(scope) = dom::closest(button, selector)? {
            return Ok(Some(scope));
        }
    }
    Ok(None)
}

