//! Unit tests for the in-memory cache store

use std::time::Duration;

use crate::cache::memory_store::MemoryCacheStore;
use crate::cache::store::CacheStoreTrait;
use fr_shared::config::cache::{MemoryCacheConfig, MAX_EXPIRATION_SECONDS};

#[tokio::test]
async fn test_set_get_delete() {
    let store = MemoryCacheStore::default();

    store.set_with_expiry("avatar:alice", "a", 60).await.unwrap();
    assert_eq!(store.get("avatar:alice").await.unwrap(), Some("a".to_string()));
    assert_eq!(store.get("avatar:bob").await.unwrap(), None);

    assert!(store.delete("avatar:alice").await.unwrap());
    assert!(!store.delete("avatar:alice").await.unwrap());
    assert!(store.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_entries_expire() {
    let store = MemoryCacheStore::default();
    store.set_with_expiry("avatar:alice", "a", 10).await.unwrap();

    tokio::time::advance(Duration::from_secs(9)).await;
    assert!(store.get("avatar:alice").await.unwrap().is_some());

    tokio::time::advance(Duration::from_secs(1)).await;
    assert_eq!(store.get("avatar:alice").await.unwrap(), None);
    assert_eq!(store.len().await, 0);
}

#[tokio::test(start_paused = true)]
async fn test_overwrite_refreshes_expiry() {
    let store = MemoryCacheStore::default();
    store.set_with_expiry("k", "old", 10).await.unwrap();

    tokio::time::advance(Duration::from_secs(8)).await;
    store.set_with_expiry("k", "new", 10).await.unwrap();

    tokio::time::advance(Duration::from_secs(8)).await;
    assert_eq!(store.get("k").await.unwrap(), Some("new".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_full_store_evicts_soonest_expiring() {
    let store = MemoryCacheStore::with_capacity(2);
    store.set_with_expiry("short", "1", 10).await.unwrap();
    store.set_with_expiry("long", "2", 100).await.unwrap();

    store.set_with_expiry("new", "3", 50).await.unwrap();

    assert_eq!(store.len().await, 2);
    assert_eq!(store.get("short").await.unwrap(), None);
    assert!(store.get("long").await.unwrap().is_some());
    assert!(store.get("new").await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_full_store_purges_expired_first() {
    let store = MemoryCacheStore::with_capacity(2);
    store.set_with_expiry("stale", "1", 5).await.unwrap();
    store.set_with_expiry("fresh", "2", 100).await.unwrap();

    tokio::time::advance(Duration::from_secs(6)).await;
    store.set_with_expiry("new", "3", 1).await.unwrap();

    assert!(store.get("fresh").await.unwrap().is_some());
    assert!(store.get("new").await.unwrap().is_some());
}

#[tokio::test]
async fn test_zero_capacity_stores_nothing() {
    let store = MemoryCacheStore::new(&MemoryCacheConfig {
        max_entries: 0,
        default_ttl: 60,
    });
    store.set_with_expiry("k", "v", 60).await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_out_of_range_ttl_is_clamped() {
    let store = MemoryCacheStore::with_capacity(10);
    store.set_with_expiry("k", "v", u64::MAX).await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));

    tokio::time::advance(Duration::from_secs(MAX_EXPIRATION_SECONDS)).await;
    assert_eq!(store.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_entity_cache_with_huge_ttl_still_resolves() {
    use std::sync::Arc;

    use fr_core::domain::entities::account::{Account, AvatarImage};
    use fr_core::repositories::InMemoryAccountRepository;

    use crate::cache::entity_cache::EntityCache;

    let repo = Arc::new(
        InMemoryAccountRepository::with_accounts([Account::local(
            "alice",
            AvatarImage::new("/a.png", "/a.png", "image/png"),
        )])
        .await,
    );
    let cache = EntityCache::new(MemoryCacheStore::default(), repo.clone()).with_ttl(u64::MAX);

    assert!(cache.avatar("alice", None).await.unwrap().is_some());
    assert!(cache.avatar("alice", None).await.unwrap().is_some());
    assert_eq!(repo.lookups(), 1);
}
