//! Profile emoji module
//!
//! Resolves `:@user:` and `:@user@domain:` shortcodes in free text to the
//! avatars of the referenced accounts:
//! - Shortcode extraction with boundary checks and deduplication
//! - Local-domain normalisation of lookup keys
//! - Resolution through a pluggable (usually cache-backed) avatar resolver
//! - Lazily computed profile emoji on announcements

mod announcement;
mod scanner;
mod token;
mod traits;

#[cfg(test)]
mod tests;

pub use scanner::ProfileEmojiScanner;
pub use token::{extract_shortcodes, LocalDomain, LookupKey, ShortcodeToken};
pub use traits::AvatarResolverTrait;
