//! Shared validation patterns for identity inputs

use regex::Regex;

lazy_static::lazy_static! {
    /// Slug validation regex
    /// Allows lowercase alphanumeric characters with hyphens
    /// No leading/trailing hyphens, minimum 1 character
    pub static ref SLUG_REGEX: Regex =
        Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").unwrap();

    /// E.164 phone number regex (+ optional, 2-15 digits, no leading zero)
    pub static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap();
}

/// Validate a slug according to the platform rules
pub fn validate_slug(slug: &str) -> bool {
    if !SLUG_REGEX.is_match(slug) {
        return false;
    }

    // Check for double hyphens
    if slug.contains("--") {
        return false;
    }

    true
}
