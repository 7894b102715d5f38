// Built-in rule checks

use once_cell::sync::Lazy;
use regex::Regex;

/// Message recorded by `Required` for a missing or blank field
pub const REQUIRED_MESSAGE: &str = "This field cannot be blank";

/// Message recorded by `IsEmail` for a malformed address
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

// Dot-atom local part, then one or more dotted DNS labels. The trailing `+`
// requires a dot in the domain.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$").unwrap()
});

/// Message recorded by `MinLength`
pub fn min_length_message(length: usize) -> String {
    format!("This field must be at least {} characters", length)
}

/// A value counts as present when it has something besides whitespace
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Checks the trimmed value has at least `length` characters.
///
/// Characters are counted, not bytes, so "ñandú" has length 5.
pub fn meets_min_length(value: &str, length: usize) -> bool {
    value.trim().chars().count() >= length
}

/// Checks `value` is a syntactically valid email address.
///
/// The value is matched as-is; surrounding whitespace makes it invalid.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_present() {
        assert!(is_present("data"));
        assert!(is_present("  data  "));
        assert!(!is_present(""));
        assert!(!is_present(" \t\r\n"));
    }

    #[test]
    fn test_min_length_exact() {
        assert!(meets_min_length("exact", 5));
        assert!(!meets_min_length("four", 5));
    }

    #[test]
    fn test_min_length_ignores_surrounding_whitespace() {
        assert!(!meets_min_length("  ab  ", 3));
        assert!(meets_min_length("  a b  ", 3));
    }

    #[test]
    fn test_min_length_counts_characters() {
        assert!(meets_min_length("ñandú", 5));
        assert!(!meets_min_length("ñandú", 6));
    }

    #[test]
    fn test_min_length_zero_always_passes() {
        assert!(meets_min_length("", 0));
    }

    #[test]
    fn test_email_variations() {
        assert!(is_email("me@here.com"));
        assert!(is_email("user+tag@example.com"));
        assert!(is_email("user.name@example.co.uk"));
        assert!(is_email("o'brien@mail-host.ie"));
        assert!(is_email("first.middle.last@here.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_email(""));
        assert!(!is_email("x"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@@example.com"));
        assert!(!is_email("user@example"));
        assert!(!is_email("user@.com"));
        assert!(!is_email("user@example..com"));
        assert!(!is_email("user@-example.com"));
        assert!(!is_email("a@b@example.com"));
        assert!(!is_email(".me@here.com"));
        assert!(!is_email("me.@here.com"));
        assert!(!is_email("me..you@here.com"));
    }

    #[test]
    fn test_email_is_not_trimmed() {
        assert!(!is_email(" me@here.com"));
        assert!(!is_email("me@here.com "));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            min_length_message(3),
            "This field must be at least 3 characters"
        );
    }
}
