//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Lowercase hostname, optionally with a port; must not end in a hyphen or dot
static HOSTNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9.\-]*[a-z0-9](:\d{1,5})?$").unwrap()
});

/// Common validation functions
pub mod validators {
    use super::HOSTNAME_REGEX;

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if a string matches a pattern
    pub fn matches_pattern(value: &str, pattern: &regex::Regex) -> bool {
        pattern.is_match(value)
    }

    /// Check if a URL is absolute (basic check)
    pub fn is_valid_url(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }

    /// Check if a value looks like a hostname this server could federate with
    pub fn is_valid_hostname(host: &str) -> bool {
        length_between(host, 1, 253) && HOSTNAME_REGEX.is_match(host)
    }
}
