//! Parsing and formatting of the counters shown on feed buttons.

#[cfg(test)]
#[path = "count_text_test.rs"]
mod count_text_test;

/// Extract a count from rendered text by keeping every ASCII digit.
///
/// Grouping separators vanish (`"1,024"` -> 1024). Text without digits, or
/// with more digits than fit in a `u64`, degrades to 0.
pub fn parse_count_digits(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(0)
}

/// Parse a count stored in an attribute. Unlike rendered text this must be a
/// plain integer.
pub fn parse_count_attr(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Group thousands with commas. Used when the browser locale formatter is
/// unavailable.
pub fn group_thousands(n: u64) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
