//! Light/dark switch bound to `[data-action="toggle-theme"]`.
//!
//! The body class is the live theme. Each toggle reads it back, so a class
//! changed by other scripts is respected.

use web_sys::Document;

use crate::action::Action;
use crate::config::UiConfig;
use crate::error::UiError;
use crate::state::theme::Theme;
use crate::util::{dom, preference};

const LABEL_SELECTOR: &str = "[data-theme-label]";
const ICON_SELECTOR: &str = "[data-theme-icon]";

pub struct ThemeSwitcher {
    doc: Document,
    storage_key: &'static str,
}

impl ThemeSwitcher {
    /// Apply the initial theme. Returns a switcher only when the page has a
    /// toggle control to drive it.
    pub fn attach(doc: &Document, config: &UiConfig) -> Result<Option<Self>, UiError> {
        let theme = preference::read_preference(config.theme_storage_key);
        apply(doc, theme)?;
        log::debug!("initial theme: {}", theme.as_str());

        if dom::query_all(doc, &Action::ToggleTheme.selector())?.is_empty() {
            log::debug!("no theme toggle on page");
            return Ok(None);
        }
        Ok(Some(Self { doc: doc.clone(), storage_key: config.theme_storage_key }))
    }

    /// Theme currently shown by the body class.
    pub fn current(&self) -> Result<Theme, UiError> {
        let body = dom::body(&self.doc)?;
        Ok(Theme::from_body_class(dom::has_class(&body, Theme::Light.as_str())))
    }

    /// Flip, persist and re-apply the theme.
    pub fn toggle(&self) -> Result<Theme, UiError> {
        let next = self.current()?.toggled();
        preference::persist(self.storage_key, next);
        apply(&self.doc, next)?;
        Ok(next)
    }
}

fn apply(doc: &Document, theme: Theme) -> Result<(), UiError> {
    let body = dom::body(doc)?;
    dom::set_classes(&body, &[Theme::Light.as_str()], theme.is_light())?;
    dom::set_classes(&body, &[Theme::Dark.as_str()], !theme.is_light())?;

    for control in dom::query_all(doc, &Action::ToggleTheme.selector())? {
        if let Some(label) = dom::query_in(&control, LABEL_SELECTOR)? {
            label.set_text_content(Some(theme.label()));
        }
        if let Some(icon) = dom::query_in(&control, ICON_SELECTOR)? {
            icon.set_text_content(Some(theme.icon()));
        }
    }
    Ok(())
}
