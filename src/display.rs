//! Presentation formatting.
//!
//! One-way transforms applied at render time. Nothing produced here is fed
//! back into arithmetic; [`crate::core::strip_separators`] undoes it.

use crate::core::{ERROR_SENTINEL, SEPARATOR};

/// Insert thousands separators into the integer digits of a numeric string.
///
/// The error sentinel, empty strings and values ending in a point (a number
/// still being typed) pass through unchanged.
///
/// # Example
///
/// ```rust
/// use abacus::core::strip_separators;
/// use abacus::display::format_for_display;
///
/// assert_eq!(format_for_display("1234567.891"), "1,234,567.891");
/// assert_eq!(format_for_display("-1000"), "-1,000");
/// assert_eq!(format_for_display("1000."), "1000.");
/// assert_eq!(strip_separators(&format_for_display("1234567")), "1234567");
/// ```
pub fn format_for_display(value: &str) -> String {
    if value == ERROR_SENTINEL || value.is_empty() || value.ends_with('.') {
        return value.to_string();
    }

    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let integer_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (integer, rest) = unsigned.split_at(integer_end);

    format!("{sign}{}{rest}", group_thousands(integer))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
