//! Shared validation primitives.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Permissive on purpose: one @, at least one dot in the domain
    // part, no whitespace. Deliverability is the provider's problem.
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Character count after trimming, used for all length bounds.
pub fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
