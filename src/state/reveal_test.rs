use super::*;

#[test]
fn first_intersection_reveals() {
    let mut set = RevealSet::default();
    assert!(set.on_intersection(0, true));
    assert!(set.is_revealed(0));
}

#[test]
fn reentering_viewport_never_reveals_again() {
    let mut set = RevealSet::default();
    assert!(set.on_intersection(3, true));
    assert!(!set.on_intersection(3, false));
    assert!(!set.on_intersection(3, true));
    assert!(!set.on_intersection(3, true));
    assert_eq!(set.len(), 1);
}

#[test]
fn non_intersecting_entries_are_ignored() {
    let mut set = RevealSet::default();
    assert!(!set.on_intersection(1, false));
    assert!(!set.is_revealed(1));
    assert!(set.is_empty());
}

#[test]
fn elements_are_tracked_independently() {
    let mut set = RevealSet::default();
    assert!(set.on_intersection(0, true));
    assert!(set.on_intersection(1, true));
    assert_eq!(set.len(), 2);
}
