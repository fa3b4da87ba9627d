use super::*;

// =============================================================
// parse_count_digits
// =============================================================

#[test]
fn plain_number_parses() {
    assert_eq!(parse_count_digits("12"), 12);
}

#[test]
fn grouped_number_drops_separators() {
    assert_eq!(parse_count_digits("1,024"), 1024);
    assert_eq!(parse_count_digits("1 234 567"), 1_234_567);
}

#[test]
fn surrounding_text_is_ignored() {
    assert_eq!(parse_count_digits("  42 claps "), 42);
}

#[test]
fn text_without_digits_is_zero() {
    assert_eq!(parse_count_digits(""), 0);
    assert_eq!(parse_count_digits("Clap"), 0);
}

#[test]
fn overflowing_digits_degrade_to_zero() {
    assert_eq!(parse_count_digits("99999999999999999999999"), 0);
}

// =============================================================
// parse_count_attr
// =============================================================

#[test]
fn attr_accepts_plain_integers_only() {
    assert_eq!(parse_count_attr("17"), Some(17));
    assert_eq!(parse_count_attr(" 17 "), Some(17));
    assert_eq!(parse_count_attr("1,024"), None);
    assert_eq!(parse_count_attr(""), None);
}

// =============================================================
// group_thousands
// =============================================================

#[test]
fn small_numbers_are_not_grouped() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
}

#[test]
fn thousands_are_grouped() {
    assert_eq!(group_thousands(1025), "1,025");
    assert_eq!(group_thousands(100_000), "100,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn parse_and_group_agree() {
    assert_eq!(parse_count_digits(&group_thousands(9_876_543)), 9_876_543);
}
