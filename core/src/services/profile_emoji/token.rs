//! Shortcode tokens and lookup-key normalisation

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use fr_shared::config::InstanceConfig;
use fr_shared::utils::validation::validators;

use crate::domain::entities::account::USERNAME_PATTERN;

/// Lowercase hostname: alphanumerics, dots and hyphens, ending in an alphanumeric
const DOMAIN_PATTERN: &str = r"[a-z0-9.\-]+[a-z0-9]+";

// `:@username:` or `:@username@domain:`; boundaries are checked by hand since
// the regex crate has no look-around.
static SHORTCODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i):@({})(?:@({}))?:",
        USERNAME_PATTERN, DOMAIN_PATTERN
    ))
    .unwrap()
});

/// A `:@username[@domain]:` reference found in text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortcodeToken {
    /// Username exactly as written
    pub username: String,
    /// Domain exactly as written, `None` when the token has no domain part
    pub domain: Option<String>,
}

impl ShortcodeToken {
    pub fn new(username: impl Into<String>, domain: Option<&str>) -> Self {
        Self {
            username: username.into(),
            domain: domain.map(str::to_string),
        }
    }

    /// Key to hand to the avatar resolver
    ///
    /// A token without a domain inherits `context_domain`. A domain equal to the
    /// local domain is dropped so local accounts are always looked up the same way.
    pub fn lookup_key(&self, context_domain: Option<&str>, local_domain: &LocalDomain) -> LookupKey {
        let context_domain = context_domain.filter(|d| validators::not_empty(d));
        let domain = self
            .domain
            .as_deref()
            .or(context_domain)
            .filter(|d| !local_domain.is_local(d))
            .map(str::to_string);

        LookupKey {
            username: self.username.clone(),
            domain,
        }
    }
}

/// Normalised `(username, domain-or-local)` pair passed to the resolver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    pub username: String,
    /// `None` means the local instance
    pub domain: Option<String>,
}

impl LookupKey {
    pub fn is_local(&self) -> bool {
        self.domain.is_none()
    }
}

/// The instance's own domain, used to recognise local handles
///
/// An absent or blank value disables local-domain substitution: every explicit
/// domain is then treated as remote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalDomain(Option<String>);

impl LocalDomain {
    pub fn new(domain: Option<&str>) -> Self {
        Self(
            domain
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        )
    }

    pub fn from_config(config: &InstanceConfig) -> Self {
        Self::new(config.local_domain())
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether `domain` names this instance (ASCII case-insensitive)
    pub fn is_local(&self, domain: &str) -> bool {
        self.0
            .as_deref()
            .map_or(false, |local| local.eq_ignore_ascii_case(domain))
    }
}

fn is_boundary(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => !(c.is_alphanumeric() || c == ':'),
    }
}

/// Extract unique shortcode tokens in order of first occurrence
///
/// A token only counts when the character before its opening colon and the
/// character after its closing colon are neither alphanumeric nor a colon
/// (start and end of text count as boundaries). Tokens are deduplicated on the
/// exact `(username, domain)` pair as written.
pub fn extract_shortcodes(text: &str) -> Vec<ShortcodeToken> {
    let mut tokens = Vec::new();
    let mut seen = HashSet::new();
    let mut pos = 0;

    while let Some(caps) = SHORTCODE_REGEX.captures_at(text, pos) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => break,
        };

        let before = text[..whole.start()].chars().next_back();
        let after = text[whole.end()..].chars().next();

        if !(is_boundary(before) && is_boundary(after)) {
            // Retry just past the opening colon; ':' is one byte.
            pos = whole.start() + 1;
            continue;
        }
        pos = whole.end();

        let username = caps.get(1).map_or("", |m| m.as_str());
        let domain = caps.get(2).map(|m| m.as_str());
        let token = ShortcodeToken::new(username, domain);
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }

    tokens
}
