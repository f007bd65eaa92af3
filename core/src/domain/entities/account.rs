//! Account entity as seen by the emoji layer: identity plus avatar.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Username grammar shared by account handles and shortcodes (case-insensitive)
pub const USERNAME_PATTERN: &str = r"[a-z0-9_]+(?:[a-z0-9_.\-]+[a-z0-9_]+)?";

/// Content type for which an animated/static variant pair exists
pub const ANIMATED_CONTENT_TYPE: &str = "image/gif";

/// Which rendition of an image to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageVariant {
    /// The uploaded file, possibly animated
    Original,
    /// A still frame rendition
    Static,
}

/// Avatar attachment of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarImage {
    /// URL or path of the original upload
    pub url: String,

    /// URL or path of the static rendition
    pub static_url: String,

    /// MIME type of the original upload
    pub content_type: String,
}

impl AvatarImage {
    pub fn new(
        url: impl Into<String>,
        static_url: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            static_url: static_url.into(),
            content_type: content_type.into(),
        }
    }

    /// Whether the original upload is an animated image
    pub fn is_animated(&self) -> bool {
        self.content_type.eq_ignore_ascii_case(ANIMATED_CONTENT_TYPE)
    }

    /// URL for the requested variant
    ///
    /// Only GIF uploads have a distinct static rendition; every other content
    /// type serves the original regardless of the requested variant.
    pub fn url_for(&self, variant: ImageVariant) -> &str {
        match variant {
            ImageVariant::Static if self.is_animated() => &self.static_url,
            _ => &self.url,
        }
    }
}

/// Account entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Username without any domain part
    pub username: String,

    /// Domain of a remote account, `None` for local accounts
    pub domain: Option<String>,

    /// Display name shown next to the handle
    #[serde(default)]
    pub display_name: String,

    /// Avatar attachment
    pub avatar: AvatarImage,
}

impl Account {
    /// Creates a local account
    pub fn local(username: impl Into<String>, avatar: AvatarImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            domain: None,
            display_name: String::new(),
            avatar,
        }
    }

    /// Creates a remote account
    pub fn remote(username: impl Into<String>, domain: impl Into<String>, avatar: AvatarImage) -> Self {
        Self {
            domain: Some(domain.into()),
            ..Self::local(username, avatar)
        }
    }

    /// Sets the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Whether this account lives on this instance
    pub fn is_local(&self) -> bool {
        self.domain.is_none()
    }

    /// Handle relative to this instance: `username` or `username@domain`
    pub fn acct(&self) -> String {
        match &self.domain {
            Some(domain) => format!("{}@{}", self.username, domain),
            None => self.username.clone(),
        }
    }
}
