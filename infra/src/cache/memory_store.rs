//! In-memory cache store
//!
//! Process-local replacement for Redis, used in development and tests.
//! Entries expire lazily on read. When the store is full the entry closest to
//! expiry is evicted to make room.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use fr_shared::config::cache::{MemoryCacheConfig, MAX_EXPIRATION_SECONDS};

use crate::InfrastructureError;

use super::store::CacheStoreTrait;

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: Instant,
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Thread-safe in-memory key/value store with expiry
#[derive(Clone)]
pub struct MemoryCacheStore {
    entries: Arc<RwLock<HashMap<String, MemoryEntry>>>,
    max_entries: usize,
}

impl MemoryCacheStore {
    /// Create a store from configuration
    pub fn new(config: &MemoryCacheConfig) -> Self {
        Self::with_capacity(config.max_entries)
    }

    /// Create a store holding at most `max_entries` entries
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            max_entries,
        }
    }

    /// Number of stored entries, expired ones included until they are purged
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new(&MemoryCacheConfig::default())
    }
}

/// Expiry deadline for a TTL, clamped to `MAX_EXPIRATION_SECONDS` when the
/// TTL does not fit in an `Instant`
fn expiry_instant(now: Instant, expiry_seconds: u64) -> Instant {
    now.checked_add(Duration::from_secs(expiry_seconds))
        .unwrap_or_else(|| {
            debug!("TTL of {}s out of range, clamping to {}s", expiry_seconds, MAX_EXPIRATION_SECONDS);
            now + Duration::from_secs(MAX_EXPIRATION_SECONDS)
        })
}

#[async_trait]
impl CacheStoreTrait for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Expired: drop it unless it was refreshed in the meantime
        let mut entries = self.entries.write().await;
        if entries.get(key).map_or(false, |e| e.is_expired(now)) {
            entries.remove(key);
            debug!("Expired key '{}' removed from memory cache", key);
        }
        Ok(None)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        if self.max_entries == 0 {
            return Ok(());
        }

        let now = Instant::now();
        let expires_at = expiry_instant(now, expiry_seconds);
        let mut entries = self.entries.write().await;

        if !entries.contains_key(key) && entries.len() >= self.max_entries {
            entries.retain(|_, entry| !entry.is_expired(now));
        }

        if !entries.contains_key(key) && entries.len() >= self.max_entries {
            let victim = entries
                .iter()
                .min_by_key(|(_, entry)| entry.expires_at)
                .map(|(k, _)| k.clone());
            if let Some(victim) = victim {
                debug!("Memory cache full, evicting key '{}'", victim);
                entries.remove(&victim);
            }
        }

        entries.insert(
            key.to_string(),
            MemoryEntry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        Ok(self.entries.write().await.remove(key).is_some())
    }
}
