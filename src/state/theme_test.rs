use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(Theme::resolve(Some("dark"), true), Theme::Dark);
    assert_eq!(Theme::resolve(Some("light"), false), Theme::Light);
}

#[test]
fn missing_preference_follows_system_light_signal() {
    assert_eq!(Theme::resolve(None, true), Theme::Light);
    assert_eq!(Theme::resolve(None, false), Theme::Dark);
}

#[test]
fn empty_preference_counts_as_missing() {
    assert_eq!(Theme::resolve(Some(""), true), Theme::Light);
}

#[test]
fn unknown_preference_resolves_dark() {
    assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    assert_eq!(Theme::resolve(Some("LIGHT"), true), Theme::Dark);
}

#[test]
fn default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

// =============================================================
// toggle / presentation
// =============================================================

#[test]
fn toggle_is_a_strict_two_state_flip() {
    let start = Theme::resolve(Some("dark"), false);
    let once = start.toggled();
    assert_eq!(once.as_str(), "light");
    assert_eq!(once.toggled(), start);
}

#[test]
fn body_class_decides_current_theme() {
    assert_eq!(Theme::from_body_class(true), Theme::Light);
    assert_eq!(Theme::from_body_class(false), Theme::Dark);
}

#[test]
fn toggle_starts_from_externally_set_body_class() {
    // Stored preference said dark, but another script switched the body to light.
    let applied = Theme::resolve(Some("dark"), false);
    let live = Theme::from_body_class(true);
    assert_eq!(applied, Theme::Dark);
    assert_eq!(live.toggled(), Theme::Dark);
}

#[test]
fn labels_and_icons_follow_theme() {
    assert_eq!(Theme::Light.label(), "Light");
    assert_eq!(Theme::Dark.label(), "Dark");
    assert_eq!(Theme::Light.icon(), "🌤️");
    assert_eq!(Theme::Dark.icon(), "🌙");
    assert!(Theme::Light.is_light());
    assert!(!Theme::Dark.is_light());
}
