//! Telephone value sanitising.

/// Characters allowed besides ASCII digits.
const PUNCTUATION: [char; 4] = [',', '(', ')', '-'];

/// Whether `ch` may appear in a telephone field.
#[must_use]
pub fn is_phone_char(ch: char) -> bool {
    ch.is_ascii_digit() || PUNCTUATION.contains(&ch)
}

/// Keep digits, commas, parentheses and hyphens, truncated to `max_len` characters.
#[must_use]
pub fn sanitize_phone(value: &str, max_len: usize) -> String {
    value
        .chars()
        .filter(|ch| is_phone_char(*ch))
        .take(max_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{is_phone_char, sanitize_phone};

    #[test]
    fn strips_disallowed_characters() {
        assert_eq!(
            sanitize_phone("(+44) 7700-900 123abc", 15),
            "(44)7700-900123"
        );
        assert_eq!(sanitize_phone("01632,960,001", 15), "01632,960,001");
    }

    #[test]
    fn truncates_after_filtering() {
        assert_eq!(sanitize_phone("1234567890123456789", 15), "123456789012345");
        assert_eq!(sanitize_phone("12 34", 3), "123");
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(!is_phone_char('٣'));
        assert!(!is_phone_char('+'));
        assert!(is_phone_char('('));
        assert_eq!(sanitize_phone("٣٣", 15), "");
    }
}
