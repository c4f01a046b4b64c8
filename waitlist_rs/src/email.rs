//! Minimal email shape check.
//!
//! Mirrors what the browser-side form used to accept: something, an `@`,
//! something, a `.`, something, with no whitespace anywhere. Deliverability is
//! the provider's problem.

use std::sync::OnceLock;

use regex::Regex;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn regex_email_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^\S+@\S+\.\S+$"))
}

/// Trim surrounding whitespace and check the shape.
///
/// Returns the trimmed address when it passes.
pub fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !regex_email_shape().is_match(trimmed) {
        return None;
    }
    Some(trimmed)
}
