//! Tests for lazily resolved announcement emoji

use std::sync::Arc;

use crate::domain::entities::announcement::Announcement;
use crate::domain::entities::emoji::{CustomEmoji, Emoji};
use crate::services::profile_emoji::{LocalDomain, ProfileEmojiScanner};

use super::mocks::{alice, bob_remote, MockAvatarResolver};

#[tokio::test]
async fn test_profile_emojis_are_resolved_once() {
    let resolver = Arc::new(MockAvatarResolver::new(vec![alice()]));
    let scanner = ProfileEmojiScanner::new(resolver.clone(), LocalDomain::new(Some("home.example")));
    let announcement = Announcement::new("Welcome from :@alice:!");

    let first = announcement.profile_emojis(&scanner).await.len();
    let second = announcement.profile_emojis(&scanner).await.len();

    assert_eq!(first, 1);
    assert_eq!(second, 1);
    assert_eq!(resolver.calls().len(), 1);
}

#[tokio::test]
async fn test_bare_shortcodes_in_announcements_are_local() {
    let resolver = Arc::new(MockAvatarResolver::new(vec![alice(), bob_remote()]));
    let scanner = ProfileEmojiScanner::new(resolver.clone(), LocalDomain::new(Some("home.example")));
    let announcement = Announcement::new(":@alice: :@bob:");

    let emojis = announcement.profile_emojis(&scanner).await;
    assert_eq!(emojis.len(), 1);
    assert_eq!(
        resolver.calls(),
        vec![("alice".to_string(), None), ("bob".to_string(), None)]
    );
}

#[tokio::test]
async fn test_all_emojis_lists_custom_before_profile() {
    let resolver = Arc::new(MockAvatarResolver::new(vec![alice(), bob_remote()]));
    let scanner = ProfileEmojiScanner::new(resolver, LocalDomain::new(Some("home.example")));
    let announcement = Announcement::new(":blobcat: :@bob@remote.example: :@alice:")
        .with_emoji(CustomEmoji::new("blobcat", "/emoji/blobcat.png", "/emoji/blobcat.png"));

    let shortcodes: Vec<String> = announcement
        .all_emojis(&scanner)
        .await
        .iter()
        .map(|e| e.shortcode())
        .collect();

    assert_eq!(shortcodes, vec!["blobcat", "@bob@remote.example", "@alice"]);
}
