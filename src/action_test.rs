use super::*;

// =============================================================
// parse / as_str
// =============================================================

#[test]
fn parse_recognizes_every_action() {
    for action in Action::ALL {
        assert_eq!(Action::parse(action.as_str()), Some(action));
    }
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(Action::parse("  clap "), Some(Action::Clap));
}

#[test]
fn parse_rejects_unknown_identifiers() {
    assert_eq!(Action::parse("share"), None);
    assert_eq!(Action::parse(""), None);
    assert_eq!(Action::parse("Clap"), None);
}

#[test]
fn selector_quotes_identifier() {
    assert_eq!(Action::OpenComposer.selector(), "[data-action=\"open-composer\"]");
}

// =============================================================
// interaction_kind
// =============================================================

#[test]
fn only_feed_actions_map_to_interactions() {
    assert_eq!(Action::Clap.interaction_kind(), Some(InteractionKind::Clap));
    assert_eq!(Action::Refill.interaction_kind(), Some(InteractionKind::Refill));
    assert_eq!(Action::ToggleTheme.interaction_kind(), None);
    assert_eq!(Action::OpenComposer.interaction_kind(), None);
    assert_eq!(Action::CloseComposer.interaction_kind(), None);
}
