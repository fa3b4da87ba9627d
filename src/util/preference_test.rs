#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn nothing_is_stored_outside_the_browser() {
    assert_eq!(read_stored("spill-theme"), None);
}

#[test]
fn system_signal_is_false_outside_the_browser() {
    assert!(!system_prefers_light());
}

#[test]
fn read_preference_defaults_to_dark() {
    assert_eq!(read_preference("spill-theme"), Theme::Dark);
}

#[test]
fn persist_is_noop_but_callable() {
    persist("spill-theme", Theme::Light);
    persist("spill-theme", Theme::Dark);
}
