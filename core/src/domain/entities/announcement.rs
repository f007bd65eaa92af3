//! Announcement entity published by instance administrators.

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use uuid::Uuid;

use super::emoji::{CustomEmoji, ProfileEmoji};

/// Link attached below an announcement body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementLink {
    pub url: String,
    pub text: String,
}

impl AnnouncementLink {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

/// Announcement entity
///
/// Profile emoji referenced in `text` are resolved lazily, at most once per
/// instance; see `Announcement::profile_emojis`.
#[derive(Debug, Clone)]
pub struct Announcement {
    /// Unique identifier
    pub id: Uuid,

    /// Source text as written by the administrator
    pub text: String,

    /// Rendered HTML body
    pub content_html: String,

    /// Links shown under the body
    pub links: Vec<AnnouncementLink>,

    /// Custom emoji used in the text
    pub emojis: Vec<CustomEmoji>,

    pub(crate) profile_emojis: OnceCell<Vec<ProfileEmoji>>,
}

impl Announcement {
    /// Creates an announcement whose HTML body is the plain text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: Uuid::new_v4(),
            content_html: text.clone(),
            text,
            links: Vec::new(),
            emojis: Vec::new(),
            profile_emojis: OnceCell::new(),
        }
    }

    pub fn with_content_html(mut self, html: impl Into<String>) -> Self {
        self.content_html = html.into();
        self
    }

    pub fn with_link(mut self, link: AnnouncementLink) -> Self {
        self.links.push(link);
        self
    }

    pub fn with_emoji(mut self, emoji: CustomEmoji) -> Self {
        self.emojis.push(emoji);
        self
    }
}
