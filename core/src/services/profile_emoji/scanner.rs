//! Profile emoji scanner

use std::collections::HashSet;
use std::sync::Arc;
use tracing;

use fr_shared::utils::validation::validators;

use crate::domain::entities::emoji::ProfileEmoji;

use super::token::{extract_shortcodes, LocalDomain, LookupKey};
use super::traits::AvatarResolverTrait;

/// Turns free text into the profile emoji it references
pub struct ProfileEmojiScanner<R: AvatarResolverTrait> {
    /// Avatar resolver, usually backed by the entity cache
    resolver: Arc<R>,
    /// Domain of this instance
    local_domain: LocalDomain,
}

impl<R: AvatarResolverTrait> ProfileEmojiScanner<R> {
    /// Create a new scanner
    ///
    /// # Arguments
    ///
    /// * `resolver` - Avatar lookup implementation
    /// * `local_domain` - The instance's own domain, read once at startup
    pub fn new(resolver: Arc<R>, local_domain: LocalDomain) -> Self {
        Self {
            resolver,
            local_domain,
        }
    }

    pub fn local_domain(&self) -> &LocalDomain {
        &self.local_domain
    }

    /// Normalised lookup keys for `text`, unique and in order of first occurrence
    ///
    /// Tokens without a domain inherit `context_domain`; tokens naming the local
    /// domain collapse onto the local key, so `:@alice:` and
    /// `:@alice@local.example:` produce a single lookup.
    pub fn lookup_keys(&self, text: &str, context_domain: Option<&str>) -> Vec<LookupKey> {
        let mut seen = HashSet::new();
        extract_shortcodes(text)
            .iter()
            .map(|token| token.lookup_key(context_domain, &self.local_domain))
            .filter(|key| seen.insert(key.clone()))
            .collect()
    }

    /// Resolve every profile emoji referenced in `text`
    ///
    /// Blank or absent text yields no emoji and no resolver calls. Shortcodes
    /// the resolver cannot answer are left out; resolver failures are logged
    /// and treated the same way.
    ///
    /// # Arguments
    ///
    /// * `text` - User-authored text
    /// * `context_domain` - Domain of the text's author, applied to shortcodes without a domain
    ///
    /// # Returns
    ///
    /// Resolved emoji in order of first occurrence in `text`
    pub async fn scan(&self, text: Option<&str>, context_domain: Option<&str>) -> Vec<ProfileEmoji> {
        let text = match text {
            Some(text) if validators::not_empty(text) => text,
            _ => return Vec::new(),
        };

        let keys = self.lookup_keys(text, context_domain);
        if keys.is_empty() {
            return Vec::new();
        }

        let mut emojis = Vec::with_capacity(keys.len());
        for key in &keys {
            match self.resolver.avatar(&key.username, key.domain.as_deref()).await {
                Ok(Some(account)) => emojis.push(ProfileEmoji::new(account)),
                Ok(None) => {
                    tracing::debug!(
                        username = %key.username,
                        domain = ?key.domain,
                        "No account found for profile emoji shortcode"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        username = %key.username,
                        domain = ?key.domain,
                        error = %e,
                        event = "profile_emoji_lookup_failed",
                        "Avatar lookup failed, skipping shortcode"
                    );
                }
            }
        }

        tracing::debug!(
            shortcodes = keys.len(),
            resolved = emojis.len(),
            "Scanned text for profile emoji"
        );

        emojis
    }
}
