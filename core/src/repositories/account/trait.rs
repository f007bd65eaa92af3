//! Account repository trait defining how accounts are looked up by handle.
//!
//! Persistence lives outside this crate; the emoji layer only needs to find an
//! account from the two halves of a handle.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account lookups
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by username and domain
    ///
    /// # Arguments
    /// * `username` - Username, compared case-insensitively
    /// * `domain` - Domain of a remote account, `None` for local accounts
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No such account
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_remote(
        &self,
        username: &str,
        domain: Option<&str>,
    ) -> Result<Option<Account>, DomainError>;

    /// Insert or replace an account
    async fn save(&self, account: Account) -> Result<Account, DomainError>;
}
