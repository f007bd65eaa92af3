//! Integration tests for profile emoji resolution through the entity cache
//!
//! These run against the in-memory store selected by the development preset.

use std::sync::Arc;

use fr_core::domain::entities::{Account, Announcement, AvatarImage, CustomEmoji};
use fr_core::presentation::{AnnouncementItem, AnnouncementsPanel};
use fr_core::repositories::InMemoryAccountRepository;
use fr_infra::cache::CacheBackend;
use fr_shared::config::{AppConfig, CacheType, InstanceConfig};

async fn seeded_repository() -> Arc<InMemoryAccountRepository> {
    Arc::new(
        InMemoryAccountRepository::with_accounts([
            Account::local(
                "alice",
                AvatarImage::new("/system/alice.gif", "/system/alice_static.png", "image/gif"),
            ),
            Account::remote(
                "bob",
                "remote.example",
                AvatarImage::new("https://remote.example/bob.png", "https://remote.example/bob.png", "image/png"),
            ),
        ])
        .await,
    )
}

#[tokio::test]
async fn test_initialize_uses_memory_cache_in_development() {
    let config = AppConfig::development();
    let backend = fr_infra::initialize_cache(&config).await.unwrap();
    assert!(matches!(backend, CacheBackend::Memory(_)));
}

#[tokio::test]
async fn test_initialize_disabled_cache() {
    let mut config = AppConfig::development();
    config.cache.enabled = false;
    let backend = fr_infra::initialize_cache(&config).await.unwrap();
    assert!(matches!(backend, CacheBackend::Disabled));
}

#[tokio::test]
async fn test_repeated_scans_hit_the_cache() {
    let mut config = AppConfig::development();
    config.instance = InstanceConfig::new("friends.example");
    assert_eq!(config.cache.cache_type, CacheType::Memory);

    let repo = seeded_repository().await;
    let scanner = fr_infra::initialize(&config, repo.clone()).await.unwrap();
    assert_eq!(scanner.local_domain().as_str(), Some("friends.example"));

    let text = "hi :@alice: :@alice@Friends.Example: :@bob@remote.example:";
    let first = scanner.scan(Some(text), None).await;
    assert_eq!(first.len(), 2);
    assert_eq!(repo.lookups(), 2);

    let second = scanner.scan(Some(text), None).await;
    assert_eq!(second.len(), 2);
    assert_eq!(repo.lookups(), 2);
}

#[tokio::test]
async fn test_announcement_panel_through_cache() {
    let config = AppConfig::development();
    let repo = seeded_repository().await;
    let scanner = fr_infra::initialize(&config, repo).await.unwrap();
    let asset_base = config.instance.asset_base();

    let announcement = Announcement::new("Welcome :@alice: and :@bob@remote.example: :party:")
        .with_emoji(CustomEmoji::new("party", "/emoji/party.gif", "/emoji/party_static.png"));

    let item = AnnouncementItem::from_announcement(&announcement, &scanner, asset_base.as_deref()).await;
    let shortcodes: Vec<&str> = item.emojis.iter().map(|e| e.shortcode.as_str()).collect();
    assert_eq!(shortcodes, vec!["party", "@alice", "@bob@remote.example"]);

    let alice = &item.emojis[1];
    assert_eq!(alice.url, "https://localhost:3000/system/alice.gif");
    assert_eq!(alice.static_url, "https://localhost:3000/system/alice_static.png");
    assert!(!alice.visible_in_picker);

    let panel = AnnouncementsPanel::new(vec![item], true);
    let map = panel.emoji_map();
    assert!(map.contains_key("@bob@remote.example"));
    assert_eq!(
        map["@bob@remote.example"].static_url,
        "https://remote.example/bob.png"
    );
}
