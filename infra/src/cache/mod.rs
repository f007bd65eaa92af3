//! Cache module for entity caching
//!
//! This module provides the entity cache used to resolve profile emoji
//! avatars, together with the key/value stores it can run on: Redis for
//! deployments and an in-memory store for development and tests.

pub mod entity_cache;
pub mod memory_store;
#[cfg(feature = "redis-cache")]
pub mod redis_client;
pub mod store;

#[cfg(test)]
mod tests;

pub use entity_cache::{EntityCache, AVATAR_KEY_PREFIX};
pub use memory_store::MemoryCacheStore;
#[cfg(feature = "redis-cache")]
pub use redis_client::RedisClient;
pub use store::{CacheBackend, CacheStoreTrait};

// Re-export commonly used types
pub use fr_shared::config::cache::{CacheConfig, MemoryCacheConfig, MAX_EXPIRATION_SECONDS};
