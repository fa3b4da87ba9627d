use super::*;

#[test]
fn default_config_uses_spill_storage_key() {
    let cfg = UiConfig::default();
    assert_eq!(cfg.theme_storage_key, "spill-theme");
    assert_eq!(cfg.modal_selector, "[data-modal=\"composer\"]");
}

#[test]
fn default_timings_match_transitions() {
    let t = Timings::default();
    assert_eq!(t.page_load_ms, 120);
    assert_eq!(t.modal_focus_ms, 150);
    assert_eq!(t.modal_close_ms, 180);
    assert_eq!(t.pulse_ms, 180);
}

#[test]
fn default_reveal_options() {
    let r = RevealOptions::default();
    assert!((r.threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(r.root_margin, "0px 0px -50px 0px");
}

#[test]
fn focusable_selector_excludes_negative_tabindex() {
    assert!(FOCUSABLE_SELECTOR.contains("[tabindex]:not([tabindex=\"-1\"])"));
    assert!(FOCUSABLE_SELECTOR.starts_with("button"));
}
