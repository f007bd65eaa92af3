//! Domain entities representing core business objects.

pub mod account;
pub mod announcement;
pub mod emoji;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::{Account, AvatarImage, ImageVariant, ANIMATED_CONTENT_TYPE, USERNAME_PATTERN};
pub use announcement::{Announcement, AnnouncementLink};
pub use emoji::{CustomEmoji, Emoji, EmojiView, ProfileEmoji};
