//! Integration tests for the Redis-backed entity cache
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p fr_infra --test redis_integration -- --ignored

#![cfg(feature = "redis-cache")]

use std::sync::Arc;

use fr_core::domain::entities::{Account, AvatarImage};
use fr_core::repositories::InMemoryAccountRepository;
use fr_infra::cache::{CacheConfig, EntityCache, RedisClient};

fn redis_config() -> CacheConfig {
    CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    )
    .with_prefix("fr_test")
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_redis_connection() {
    let client = RedisClient::new(redis_config()).await;
    assert!(client.is_ok(), "Failed to connect to Redis");
    assert!(client.unwrap().health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_entity_cache_round_trip() {
    let config = redis_config();
    let client = RedisClient::new(config.clone()).await.unwrap();
    let repo = Arc::new(
        InMemoryAccountRepository::with_accounts([Account::local(
            "alice",
            AvatarImage::new("/a.png", "/a.png", "image/png"),
        )])
        .await,
    );

    let cache = EntityCache::new(client, repo.clone())
        .with_prefix(config.key_prefix.clone().unwrap_or_default())
        .with_ttl(60);

    cache.invalidate_avatar("alice", None).await.unwrap();
    assert!(cache.avatar("alice", None).await.unwrap().is_some());
    assert!(cache.avatar("alice", None).await.unwrap().is_some());
    assert_eq!(repo.lookups(), 1);

    // Clean up
    assert!(cache.invalidate_avatar("alice", None).await.unwrap());
}
