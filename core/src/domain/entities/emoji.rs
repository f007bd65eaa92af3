//! Emoji entities: curated custom emoji and avatar-backed profile emoji.
//!
//! Both kinds are exposed to clients through the same serialized shape. Profile
//! emoji are derived from account avatars at read time, are never listed in the
//! emoji picker and carry no category.

use serde::{Deserialize, Serialize};

use fr_shared::utils::asset::full_asset_url;

use super::account::{Account, AvatarImage, ImageVariant};

/// Capabilities every renderable emoji exposes
pub trait Emoji {
    /// Shortcode without the surrounding colons
    fn shortcode(&self) -> String;

    /// Image URL (or path) for the requested variant
    fn image_url(&self, variant: ImageVariant) -> &str;

    /// Whether the emoji is offered in the picker
    fn visible_in_picker(&self) -> bool;

    /// Picker category, if the emoji belongs to one
    fn category(&self) -> Option<&str>;

    /// Whether the emoji links somewhere when rendered
    fn has_links(&self) -> bool {
        false
    }

    /// Serialized view with URLs made absolute against `asset_base`
    fn to_view(&self, asset_base: Option<&str>) -> EmojiView {
        EmojiView {
            shortcode: self.shortcode(),
            url: full_asset_url(asset_base, self.image_url(ImageVariant::Original)),
            static_url: full_asset_url(asset_base, self.image_url(ImageVariant::Static)),
            visible_in_picker: self.visible_in_picker(),
            category: self.category().map(str::to_string),
        }
    }
}

/// Serialized emoji as delivered to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiView {
    pub shortcode: String,
    pub url: String,
    pub static_url: String,
    pub visible_in_picker: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Custom emoji uploaded by instance administrators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEmoji {
    pub shortcode: String,
    pub url: String,
    pub static_url: String,
    #[serde(default = "default_visible_in_picker")]
    pub visible_in_picker: bool,
    #[serde(default)]
    pub category: Option<String>,
}

impl CustomEmoji {
    pub fn new(shortcode: impl Into<String>, url: impl Into<String>, static_url: impl Into<String>) -> Self {
        Self {
            shortcode: shortcode.into(),
            url: url.into(),
            static_url: static_url.into(),
            visible_in_picker: true,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl Emoji for CustomEmoji {
    fn shortcode(&self) -> String {
        self.shortcode.clone()
    }

    fn image_url(&self, variant: ImageVariant) -> &str {
        match variant {
            ImageVariant::Original => &self.url,
            ImageVariant::Static => &self.static_url,
        }
    }

    fn visible_in_picker(&self) -> bool {
        self.visible_in_picker
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

fn default_visible_in_picker() -> bool {
    true
}

/// Emoji rendering an account avatar, referenced as `:@user@domain:`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEmoji {
    account: Account,
}

impl ProfileEmoji {
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    /// The resolved account
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// The account avatar backing this emoji
    pub fn image(&self) -> &AvatarImage {
        &self.account.avatar
    }
}

impl Emoji for ProfileEmoji {
    // Built from the resolved account, not from the text that referenced it.
    fn shortcode(&self) -> String {
        format!("@{}", self.account.acct())
    }

    fn image_url(&self, variant: ImageVariant) -> &str {
        self.account.avatar.url_for(variant)
    }

    fn visible_in_picker(&self) -> bool {
        false
    }

    fn category(&self) -> Option<&str> {
        None
    }
}
