//! Tests for the announcement entity

use crate::domain::entities::announcement::{Announcement, AnnouncementLink};
use crate::domain::entities::emoji::CustomEmoji;

#[test]
fn test_new_announcement_uses_text_as_body() {
    let announcement = Announcement::new("Maintenance tonight");
    assert_eq!(announcement.text, "Maintenance tonight");
    assert_eq!(announcement.content_html, "Maintenance tonight");
    assert!(announcement.links.is_empty());
    assert!(announcement.emojis.is_empty());
    assert!(announcement.profile_emojis.get().is_none());
}

#[test]
fn test_announcement_builders() {
    let announcement = Announcement::new("See :blobcat:")
        .with_content_html("<p>See :blobcat:</p>")
        .with_link(AnnouncementLink::new("https://friends.example/about", "About"))
        .with_emoji(CustomEmoji::new("blobcat", "/e/blobcat.png", "/e/blobcat.png"));

    assert_eq!(announcement.content_html, "<p>See :blobcat:</p>");
    assert_eq!(announcement.links.len(), 1);
    assert_eq!(announcement.links[0].text, "About");
    assert_eq!(announcement.emojis[0].shortcode, "blobcat");
}
