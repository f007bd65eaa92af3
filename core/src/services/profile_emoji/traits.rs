//! Traits for avatar resolver integration

use async_trait::async_trait;

use crate::domain::entities::account::Account;

/// Trait for the avatar lookup the scanner depends on
///
/// Implementations are expected to memoise lookups, match usernames
/// case-insensitively and answer `Ok(None)` for unknown accounts.
#[async_trait]
pub trait AvatarResolverTrait: Send + Sync {
    /// Find the account whose avatar renders `:@username@domain:`
    ///
    /// `domain` is `None` for local accounts.
    async fn avatar(&self, username: &str, domain: Option<&str>) -> Result<Option<Account>, String>;
}
