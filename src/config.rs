//! Static configuration for the page controllers.
//!
//! The page is static and has no runtime configuration source, so this is a
//! typed table of the selectors, storage key and animation timings every
//! component is initialized with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "spill-theme";
pub const DEFAULT_PAGE_LOAD_DELAY_MS: u32 = 120;
pub const DEFAULT_MODAL_FOCUS_DELAY_MS: u32 = 150;
pub const DEFAULT_MODAL_CLOSE_DELAY_MS: u32 = 180;
pub const DEFAULT_PULSE_DELAY_MS: u32 = 180;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Elements considered for the modal focus trap, before the `disabled` filter.
pub const FOCUSABLE_SELECTOR: &str = "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Delays for the fixed-length CSS transitions the controllers wait on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub page_load_ms: u32,
    pub modal_focus_ms: u32,
    pub modal_close_ms: u32,
    pub pulse_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            page_load_ms: DEFAULT_PAGE_LOAD_DELAY_MS,
            modal_focus_ms: DEFAULT_MODAL_FOCUS_DELAY_MS,
            modal_close_ms: DEFAULT_MODAL_CLOSE_DELAY_MS,
            pulse_ms: DEFAULT_PULSE_DELAY_MS,
        }
    }
}

/// Intersection observer options for the scroll animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: DEFAULT_REVEAL_THRESHOLD, root_margin: DEFAULT_REVEAL_ROOT_MARGIN }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiConfig {
    pub theme_storage_key: &'static str,
    pub modal_selector: &'static str,
    pub timings: Timings,
    pub reveal: RevealOptions,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY,
            modal_selector: "[data-modal=\"composer\"]",
            timings: Timings::default(),
            reveal: RevealOptions::default(),
        }
    }
}
