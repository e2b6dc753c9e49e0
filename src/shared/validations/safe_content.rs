//! Content safety check for user-supplied text
//!
//! Text passes when it only uses a small set of formatting tags (no
//! scripts, styles, event handlers or relative links) and contains none of
//! the banned words. Plug it into `validator` with
//! `#[validate(custom(function = "validate_safe_content"))]`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Tags allowed in user content.
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "cite", "code", "dd", "dl", "dt", "em", "i", "li", "ol", "p",
    "pre", "q", "small", "span", "strike", "strong", "sub", "sup", "u", "ul",
];

const LINK_SCHEMES: &[&str] = &["ftp", "http", "https", "mailto"];
const CITE_SCHEMES: &[&str] = &["http", "https"];

/// `(tag, attribute, allowed URL schemes)`
const ALLOWED_ATTRIBUTES: &[(&str, &str, &[&str])] = &[
    ("a", "href", LINK_SCHEMES),
    ("blockquote", "cite", CITE_SCHEMES),
    ("q", "cite", CITE_SCHEMES),
];

/// Matched case-insensitively as substrings.
pub const BANNED_WORDS: &[&str] = &[
    "fuck", "shit", "bitch", "bastard", "asshole", "씨발", "시발", "병신", "개새끼", "좆",
];

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<\s*(/)?\s*([A-Za-z][A-Za-z0-9]*)([^>]*)>").expect("valid tag regex")
});

/// Anything a browser would start parsing as a tag, comment or declaration.
static TAG_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z/!?]").expect("valid tag open regex"));

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid attribute regex")
});

/// `true` if every tag and attribute in `value` is on the allow list.
///
/// A tag opener that is not part of a complete `<...>` tag (unterminated
/// tags, comments, declarations) makes the whole value unsafe.
pub fn is_safe_markup(value: &str) -> bool {
    if !tags_terminated(value) {
        return false;
    }

    TAG_RE.captures_iter(value).all(|caps| {
        let name = caps[2].to_ascii_lowercase();
        if !ALLOWED_TAGS.contains(&name.as_str()) {
            return false;
        }
        let closing = caps.get(1).is_some();
        closing || attributes_allowed(&name, &caps[3])
    })
}

fn tags_terminated(value: &str) -> bool {
    let tags: Vec<_> = TAG_RE.find_iter(value).map(|m| m.range()).collect();
    TAG_OPEN_RE
        .find_iter(value)
        .all(|open| tags.iter().any(|tag| tag.contains(&open.start())))
}

fn attributes_allowed(tag: &str, attrs: &str) -> bool {
    ATTR_RE.captures_iter(attrs).all(|caps| {
        let attr = caps[1].to_ascii_lowercase();
        let Some((_, _, schemes)) = ALLOWED_ATTRIBUTES
            .iter()
            .find(|(t, a, _)| *t == tag && *a == attr)
        else {
            return false;
        };

        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
            .unwrap_or("");
        url_scheme(value).is_some_and(|scheme| schemes.contains(&scheme.as_str()))
    })
}

/// Lower-cased scheme of an absolute URL, `None` for relative ones.
fn url_scheme(url: &str) -> Option<String> {
    let url = url.trim();
    let colon = url.find(':')?;
    let scheme = &url[..colon];
    let valid = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then(|| scheme.to_ascii_lowercase())
}

/// First banned word found in `value`, if any.
pub fn find_banned_word(value: &str) -> Option<&'static str> {
    let lowered = value.to_lowercase();
    BANNED_WORDS
        .iter()
        .copied()
        .find(|word| lowered.contains(word))
}

fn safe_content_error(message: Cow<'static, str>) -> ValidationError {
    let mut err = ValidationError::new("safe_content");
    err.message = Some(message);
    err
}

pub fn validate_safe_content(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }

    if !is_safe_markup(value) {
        return Err(safe_content_error(Cow::Borrowed("input contains disallowed markup")));
    }

    if let Some(word) = find_banned_word(value) {
        return Err(safe_content_error(Cow::Owned(format!("'{}' is not allowed", word))));
    }

    Ok(())
}
