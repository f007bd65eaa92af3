//! Business services containing domain logic and use cases.

pub mod profile_emoji;

// Re-export commonly used types
pub use profile_emoji::{
    extract_shortcodes, AvatarResolverTrait, LocalDomain, LookupKey, ProfileEmojiScanner,
    ShortcodeToken,
};
