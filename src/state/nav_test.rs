use super::*;

#[test]
fn href_contained_in_path_is_active() {
    assert!(is_active_link("/feed/today", Some("/feed")));
    assert!(is_active_link("/profile.html", Some("profile.html")));
}

#[test]
fn unrelated_href_is_inactive() {
    assert!(!is_active_link("/feed", Some("/profile")));
}

#[test]
fn missing_or_empty_href_is_inactive() {
    assert!(!is_active_link("/feed", None));
    assert!(!is_active_link("/feed", Some("")));
}

#[test]
fn flags_follow_link_order() {
    let hrefs = [Some("/"), Some("/feed"), None, Some("/settings")];
    assert_eq!(active_flags("/feed", hrefs), vec![true, true, false, false]);
}

#[test]
fn every_link_gets_exactly_one_state() {
    let hrefs = [Some("/a"), Some("/b"), Some("/c")];
    let flags = active_flags("/b/c", hrefs);
    assert_eq!(flags.len(), 3);
    assert_eq!(flags, vec![false, true, true]);
}

#[test]
fn active_and_inactive_classes_do_not_overlap() {
    for class in ACTIVE_CLASSES {
        assert!(!INACTIVE_CLASSES.contains(class));
    }
}
