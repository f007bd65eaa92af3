//! Profile emoji support for announcements

use crate::domain::entities::announcement::Announcement;
use crate::domain::entities::emoji::{Emoji, ProfileEmoji};

use super::scanner::ProfileEmojiScanner;
use super::traits::AvatarResolverTrait;

impl Announcement {
    /// Profile emoji referenced in the announcement text
    ///
    /// Resolved on first access and kept for the lifetime of the announcement;
    /// later calls do not touch the resolver. Announcements are instance-wide,
    /// so shortcodes without a domain refer to local accounts.
    pub async fn profile_emojis<R: AvatarResolverTrait>(
        &self,
        scanner: &ProfileEmojiScanner<R>,
    ) -> &[ProfileEmoji] {
        self.profile_emojis
            .get_or_init(|| scanner.scan(Some(&self.text), None))
            .await
            .as_slice()
    }

    /// Custom emoji followed by profile emoji
    pub async fn all_emojis<R: AvatarResolverTrait>(
        &self,
        scanner: &ProfileEmojiScanner<R>,
    ) -> Vec<&dyn Emoji> {
        let profile = self.profile_emojis(scanner).await;

        self.emojis
            .iter()
            .map(|e| e as &dyn Emoji)
            .chain(profile.iter().map(|e| e as &dyn Emoji))
            .collect()
    }
}
