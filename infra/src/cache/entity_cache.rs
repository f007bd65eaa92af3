//! Entity cache service implementation
//!
//! Cache-aside lookup of accounts by handle, used to resolve the avatar behind
//! a `:@username@domain:` shortcode. Found accounts are stored as JSON for
//! `MAX_EXPIRATION_SECONDS`; unknown handles are not cached so a newly
//! federated account shows up on the next lookup.
//!
//! Keys follow the pattern `avatar:{username}[:{domain}]`, lowercased and
//! optionally namespaced by a prefix.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use fr_core::domain::entities::account::Account;
use fr_core::repositories::AccountRepository;
use fr_core::services::AvatarResolverTrait;
use fr_shared::config::cache::{prefixed_key, MAX_EXPIRATION_SECONDS};

use crate::InfrastructureError;

use super::store::CacheStoreTrait;

/// Key kind for avatar lookups
pub const AVATAR_KEY_PREFIX: &str = "avatar";

/// Build a cache key from a kind and its identifying parts
///
/// Parts are lowercased and missing parts are skipped, so
/// `to_key("avatar", &[Some("Alice"), None])` is `avatar:alice`.
pub fn to_key(kind: &str, parts: &[Option<&str>]) -> String {
    let mut key = kind.to_string();
    for part in parts.iter().flatten() {
        key.push(':');
        key.push_str(&part.to_lowercase());
    }
    key
}

/// Cache-aside account resolver
///
/// Reads go to the store first and fall back to the repository on a miss.
/// Store failures never fail a lookup: they are logged and the repository
/// answer is returned.
pub struct EntityCache<S, R>
where
    S: CacheStoreTrait,
    R: AccountRepository,
{
    store: S,
    repository: Arc<R>,
    key_prefix: Option<String>,
    ttl_seconds: u64,
}

impl<S, R> EntityCache<S, R>
where
    S: CacheStoreTrait,
    R: AccountRepository,
{
    /// Create a new entity cache
    ///
    /// # Arguments
    /// * `store` - Key/value store holding cached accounts
    /// * `repository` - Account storage consulted on a miss
    pub fn new(store: S, repository: Arc<R>) -> Self {
        Self {
            store,
            repository,
            key_prefix: None,
            ttl_seconds: MAX_EXPIRATION_SECONDS,
        }
    }

    /// Namespace every key with `prefix`
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.key_prefix = if prefix.trim().is_empty() { None } else { Some(prefix) };
        self
    }

    /// Override the entry lifetime
    pub fn with_ttl(mut self, seconds: u64) -> Self {
        self.ttl_seconds = seconds;
        self
    }

    /// Entry lifetime in seconds
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Full key under which the avatar of a handle is cached
    pub fn cache_key(&self, username: &str, domain: Option<&str>) -> String {
        prefixed_key(
            self.key_prefix.as_deref(),
            &to_key(AVATAR_KEY_PREFIX, &[Some(username), domain]),
        )
    }

    /// Look up the account behind a handle
    ///
    /// # Arguments
    /// * `username` - Username, any case
    /// * `domain` - Domain of a remote account, `None` for local accounts
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - From the cache or the repository
    /// * `Ok(None)` - No such account
    /// * `Err(InfrastructureError)` - The repository failed
    pub async fn avatar(
        &self,
        username: &str,
        domain: Option<&str>,
    ) -> Result<Option<Account>, InfrastructureError> {
        let key = self.cache_key(username, domain);

        match self.store.get(&key).await {
            Ok(Some(json)) => match serde_json::from_str::<Account>(&json) {
                Ok(account) => {
                    debug!("Cache hit for '{}'", key);
                    return Ok(Some(account));
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Discarding unreadable cached account");
                }
            },
            Ok(None) => debug!("Cache miss for '{}'", key),
            Err(e) => {
                warn!(key = %key, error = %e, "Cache read failed, using repository");
            }
        }

        let account = self.repository.find_remote(username, domain).await?;

        if let Some(account) = &account {
            self.write(&key, account).await;
        }

        Ok(account)
    }

    /// Drop the cached entry for a handle
    ///
    /// # Returns
    /// * `Ok(true)` - An entry was removed
    /// * `Ok(false)` - Nothing was cached
    pub async fn invalidate_avatar(
        &self,
        username: &str,
        domain: Option<&str>,
    ) -> Result<bool, InfrastructureError> {
        let key = self.cache_key(username, domain);
        let removed = self.store.delete(&key).await?;
        debug!("Invalidated '{}' (present: {})", key, removed);
        Ok(removed)
    }

    async fn write(&self, key: &str, account: &Account) {
        let json = match serde_json::to_string(account) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to encode account for cache");
                return;
            }
        };

        if let Err(e) = self.store.set_with_expiry(key, &json, self.ttl_seconds).await {
            warn!(key = %key, error = %e, "Cache write failed");
        }
    }
}

#[async_trait]
impl<S, R> AvatarResolverTrait for EntityCache<S, R>
where
    S: CacheStoreTrait,
    R: AccountRepository,
{
    async fn avatar(&self, username: &str, domain: Option<&str>) -> Result<Option<Account>, String> {
        EntityCache::avatar(self, username, domain)
            .await
            .map_err(|e| e.to_string())
    }
}
