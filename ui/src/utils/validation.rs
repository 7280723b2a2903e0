use regex::Regex;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Loose email shape check: something, an `@`, something, a dot, something.
/// Unanchored, so surrounding text does not make an address invalid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"))
        .is_match(email)
}

/// True when the value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length in UTF-16 code units, the unit browsers use for `maxlength`.
/// The 200-character cap and the `n/200` counter are measured in it, so a
/// character outside the Basic Multilingual Plane (most emoji) counts twice.
pub fn char_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn field_class(error: Option<&str>) -> &'static str {
    match error {
        Some(_) => "error-input",
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@org.example.com"));

        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a @b.co"));
    }

    #[test]
    fn test_blank_and_length() {
        assert!(is_blank(""));
        assert!(is_blank("   \n\t"));
        assert!(!is_blank(" x "));

        assert_eq!(char_len("abc"), 3);
        // Multi-byte characters in the BMP count once
        assert_eq!(char_len("héllo"), 5);
        // Astral characters are a surrogate pair
        assert_eq!(char_len("😀"), 2);
        assert_eq!(char_len(&"😀".repeat(100)), 200);
    }

    #[test]
    fn test_field_class() {
        assert_eq!(field_class(Some("goal is required")), "error-input");
        assert_eq!(field_class(None), "");
    }
}
