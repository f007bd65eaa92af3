//! Key/value store abstraction the entity cache runs on

use async_trait::async_trait;

use crate::InfrastructureError;

use super::memory_store::MemoryCacheStore;
#[cfg(feature = "redis-cache")]
use super::redis_client::RedisClient;

/// String key/value store with per-entry expiry
#[async_trait]
pub trait CacheStoreTrait: Send + Sync {
    /// Get a value, `None` when missing or expired
    async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError>;

    /// Set a value that expires after `expiry_seconds`
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError>;

    /// Delete a key, returning whether it existed
    async fn delete(&self, key: &str) -> Result<bool, InfrastructureError>;
}

/// Store selected at startup from `CacheStrategyConfig`
#[derive(Clone)]
pub enum CacheBackend {
    #[cfg(feature = "redis-cache")]
    Redis(RedisClient),
    Memory(MemoryCacheStore),
    /// Caching switched off: every read misses, writes are dropped
    Disabled,
}

#[async_trait]
impl CacheStoreTrait for CacheBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        match self {
            #[cfg(feature = "redis-cache")]
            CacheBackend::Redis(client) => client.get(key).await,
            CacheBackend::Memory(store) => store.get(key).await,
            CacheBackend::Disabled => Ok(None),
        }
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        match self {
            #[cfg(feature = "redis-cache")]
            CacheBackend::Redis(client) => client.set_with_expiry(key, value, expiry_seconds).await,
            CacheBackend::Memory(store) => store.set_with_expiry(key, value, expiry_seconds).await,
            CacheBackend::Disabled => Ok(()),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        match self {
            #[cfg(feature = "redis-cache")]
            CacheBackend::Redis(client) => client.delete(key).await,
            CacheBackend::Memory(store) => store.delete(key).await,
            CacheBackend::Disabled => Ok(false),
        }
    }
}
