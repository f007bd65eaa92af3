//! Announcements panel model
//!
//! The client shows announcements in a collapsible panel next to the compose
//! form. This module holds what the panel needs: one item per announcement with
//! its body, links and emoji, plus the show/hide flag. Markup is left to the client.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::entities::announcement::{Announcement, AnnouncementLink};
use crate::domain::entities::emoji::{Emoji, EmojiView};
use crate::services::profile_emoji::{AvatarResolverTrait, ProfileEmojiScanner};

/// Icon rendered beside every announcement
pub const DEFAULT_ANNOUNCEMENT_ICON: &str = "check-circle-o";

/// One announcement as rendered in the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnouncementItem {
    pub icon: String,
    pub content_html: String,
    pub links: Vec<AnnouncementLink>,
    pub emojis: Vec<EmojiView>,
}

impl AnnouncementItem {
    /// Build the panel item, resolving profile emoji through `scanner`
    pub async fn from_announcement<R: AvatarResolverTrait>(
        announcement: &Announcement,
        scanner: &ProfileEmojiScanner<R>,
        asset_base: Option<&str>,
    ) -> Self {
        let emojis = announcement
            .all_emojis(scanner)
            .await
            .into_iter()
            .map(|emoji| emoji.to_view(asset_base))
            .collect();

        Self {
            icon: DEFAULT_ANNOUNCEMENT_ICON.to_string(),
            content_html: announcement.content_html.clone(),
            links: announcement.links.clone(),
            emojis,
        }
    }
}

/// Collapsible announcements panel
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnnouncementsPanel {
    items: Vec<AnnouncementItem>,
    visible: bool,
}

impl AnnouncementsPanel {
    pub fn new(items: Vec<AnnouncementItem>, visible: bool) -> Self {
        Self { items, visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility and return the new value
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Caret shown on the header toggle button
    pub fn caret_icon(&self) -> &'static str {
        if self.visible {
            "caret-down"
        } else {
            "caret-up"
        }
    }

    pub fn items(&self) -> &[AnnouncementItem] {
        &self.items
    }

    /// Items to render; nothing while the panel is collapsed
    pub fn visible_items(&self) -> &[AnnouncementItem] {
        if self.visible {
            &self.items
        } else {
            &[]
        }
    }

    /// Emoji of every item keyed by shortcode; later items win on collisions
    pub fn emoji_map(&self) -> HashMap<&str, &EmojiView> {
        self.items
            .iter()
            .flat_map(|item| item.emojis.iter())
            .map(|emoji| (emoji.shortcode.as_str(), emoji))
            .collect()
    }
}
