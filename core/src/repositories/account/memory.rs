//! In-memory implementation of AccountRepository for tests and demos

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// Account repository backed by a HashMap
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
    lookups: Arc<AtomicUsize>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with accounts
    pub async fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.accounts.write().await;
            for account in accounts {
                map.insert(account.id, account);
            }
        }
        repo
    }

    /// Number of `find_remote` calls served so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

fn same_domain(stored: Option<&str>, wanted: Option<&str>) -> bool {
    match (stored, wanted) {
        (None, None) => true,
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_remote(
        &self,
        username: &str,
        domain: Option<&str>,
    ) -> Result<Option<Account>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| {
                a.username.eq_ignore_ascii_case(username)
                    && same_domain(a.domain.as_deref(), domain)
            })
            .cloned())
    }

    async fn save(&self, account: Account) -> Result<Account, DomainError> {
        if account.username.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Account username must not be blank".to_string(),
            });
        }

        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id, account.clone());
        Ok(account)
    }
}
