//! String helpers

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^01[0-9]-[0-9]{3,4}-[0-9]{4}$").expect("valid phone regex"));

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));

/// `true` if the string has nothing but control characters and spaces.
pub fn is_empty(s: &str) -> bool {
    s.chars().all(|c| c <= ' ')
}

pub fn is_not_empty(s: &str) -> bool {
    !is_empty(s)
}

/// `true` if the string is empty or Unicode whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn is_not_blank(s: &str) -> bool {
    !is_blank(s)
}

/// Upper-case the first character. Empty strings are returned as-is.
pub fn capitalize(s: &str) -> String {
    if is_empty(s) {
        return s.to_string();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character. Empty strings are returned as-is.
pub fn uncapitalize(s: &str) -> String {
    if is_empty(s) {
        return s.to_string();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn join<I>(items: I, delimiter: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(delimiter)
}

pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

pub fn default_if_empty<'a>(s: &'a str, default: &'a str) -> &'a str {
    if is_empty(s) {
        default
    } else {
        s
    }
}

pub fn repeat(s: &str, times: i32) -> String {
    if times <= 0 {
        return String::new();
    }
    s.repeat(times as usize)
}

/// Keep at most `max_chars` characters.
pub fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Whole-string regex match. An invalid pattern never matches.
pub fn matches(input: &str, pattern: &str) -> bool {
    match Regex::new(&format!("^(?:{})$", pattern)) {
        Ok(re) => re.is_match(input),
        Err(e) => {
            debug!(pattern, error = %e, "Invalid regex");
            false
        }
    }
}

pub fn is_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Korean mobile number, e.g. `010-1234-5678`.
pub fn is_phone_number(input: &str) -> bool {
    PHONE_RE.is_match(input)
}

/// Digits only, at least one.
pub fn is_numeric(input: &str) -> bool {
    DIGITS_RE.is_match(input)
}

/// First capture group of the first match of `pattern` in `input`.
pub fn extract_first_group(input: &str, pattern: &str) -> Option<String> {
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => {
            debug!(pattern, error = %e, "Invalid regex");
            return None;
        }
    };
    re.captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank() {
        assert!(is_empty(""));
        assert!(is_empty("  \t\n"));
        assert!(is_not_empty(" a "));
        // U+3000 is whitespace but not a control character
        assert!(!is_empty("\u{3000}"));
        assert!(is_blank("\u{3000}"));
        assert!(is_not_blank("x"));
    }

    #[test]
    fn capitalize_first_char() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
        assert_eq!(uncapitalize("Hello"), "hello");
        assert_eq!(uncapitalize("  "), "  ");
    }

    #[test]
    fn join_and_repeat() {
        assert_eq!(join([1, 2, 3], ", "), "1, 2, 3");
        assert_eq!(join(Vec::<String>::new(), "-"), "");
        assert_eq!(repeat("ab", 3), "ababab");
        assert_eq!(repeat("ab", 0), "");
        assert_eq!(repeat("ab", -2), "");
    }

    #[test]
    fn case_insensitive_compare() {
        assert!(equals_ignore_case("Rust", "rUST"));
        assert!(!equals_ignore_case("Rust", "Rusty"));
    }

    #[test]
    fn defaults_and_truncation() {
        assert_eq!(default_if_empty(" ", "n/a"), "n/a");
        assert_eq!(default_if_empty("value", "n/a"), "value");
        assert_eq!(truncate("안녕하세요", 2), "안녕");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn regex_helpers() {
        assert!(matches("abc123", "[a-z]+\\d+"));
        assert!(!matches("abc123x", "[a-z]+\\d+"));
        assert!(!matches("abc", "("));

        assert!(is_email("user.name+tag@example.com"));
        assert!(!is_email("not an email"));

        assert!(is_phone_number("010-1234-5678"));
        assert!(is_phone_number("011-123-4567"));
        assert!(!is_phone_number("02-1234-5678"));

        assert!(is_numeric("0042"));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn only_ascii_digits_count() {
        assert!(!is_numeric("١٢٣"));
        assert!(!is_numeric("１２３"));
        assert!(!is_phone_number("010-١٢٣٤-5678"));
    }

    #[test]
    fn extract_group() {
        assert_eq!(
            extract_first_group("order #1234 shipped", r"#(\d+)"),
            Some("1234".to_string())
        );
        assert_eq!(extract_first_group("nothing here", r"#(\d+)"), None);
        assert_eq!(extract_first_group("abc", "[a-"), None);
    }
}
