//! Field rule predicates.

use std::sync::OnceLock;

use regex::Regex;

/// Characters counted as "special" for password strength.
const PASSWORD_SPECIAL_CHARACTERS: &str = "_!@#$%^&*()-.?";

fn forbidden_text_characters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)[^\sa-z0-9_.&äáâàăçéëêèïíìñóöôòøșțüúûùß-]").expect("hard-coded pattern")
    })
}

fn forbidden_id_characters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)[^a-z0-9_.äöüß-]").expect("hard-coded pattern"))
}

fn forbidden_password_characters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)[^a-z0-9_!@#$%^&*().?-]").expect("hard-coded pattern"))
}

/// Trims leading and trailing whitespace from a form value.
///
/// Every string field runs through this before submission.
pub fn sanitize(value: &str) -> String {
    value.trim().to_string()
}

/// Returns `true` for values that are empty once trimmed.
pub(super) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns `true` if the value contains whitespace anywhere.
pub(super) fn has_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

/// Returns `true` if the value contains characters outside the free-text
/// whitelist (letters with common diacritics, digits, `_ . & -` and
/// whitespace).
pub(super) fn has_forbidden_text_characters(value: &str) -> bool {
    forbidden_text_characters().is_match(value)
}

/// Returns `true` if the value contains characters outside the identifier
/// whitelist (letters, digits, `_ . -` and German umlauts; no
/// whitespace).
pub(super) fn has_forbidden_id_characters(value: &str) -> bool {
    forbidden_id_characters().is_match(value)
}

/// Returns `true` if the value contains characters a password may not
/// use.
pub(super) fn has_forbidden_password_characters(value: &str) -> bool {
    forbidden_password_characters().is_match(value)
}

/// Returns `true` for passwords carrying at least one lowercase letter,
/// one uppercase letter, one digit and one special character.
pub(super) fn is_strong_password(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_trims() {
        assert_eq!(sanitize("  desk-1  "), "desk-1");
    }

    #[test]
    fn test_text_whitelist() {
        assert!(!has_forbidden_text_characters("Hotel zur Börse"));
        assert!(!has_forbidden_text_characters("Café & Co."));
        assert!(has_forbidden_text_characters("price: 10€"));
        assert!(has_forbidden_text_characters("no/slashes"));
    }

    #[test]
    fn test_id_whitelist() {
        assert!(!has_forbidden_id_characters("hotel_münchen-1"));
        assert!(has_forbidden_id_characters("two words"));
        assert!(has_forbidden_id_characters("a&b"));
    }

    #[test]
    fn test_password_strength() {
        assert!(is_strong_password("Pa5s.word"));
        assert!(!is_strong_password("password"));
        assert!(!is_strong_password("PASSWORD1!"));
        assert!(!is_strong_password("Password!"));
    }
}
