//! In-memory `AccountRepository` used when no database is configured and in
//! tests.
//!
//! Accounts live in a `HashMap` behind a single mutex. Every operation holds
//! the lock for its whole duration, so appends are check-and-write atomic.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{AccountPersistenceError, AccountRepository, AppendOutcome};
use crate::domain::{Account, Username};

/// Process-local account store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<Username, Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Username, Account>>, AccountPersistenceError> {
        self.accounts
            .lock()
            .map_err(|_| AccountPersistenceError::connection("account store lock poisoned"))
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        Ok(self.lock()?.get(username).cloned())
    }

    async fn insert(&self, account: &Account) -> Result<(), AccountPersistenceError> {
        let mut accounts = self.lock()?;
        if accounts.contains_key(account.username()) {
            return Err(AccountPersistenceError::duplicate(account.username().as_ref()));
        }
        accounts.insert(account.username().clone(), account.clone());
        Ok(())
    }

    async fn append_want_to_go(
        &self,
        username: &Username,
        destination: &str,
    ) -> Result<AppendOutcome, AccountPersistenceError> {
        let mut accounts = self.lock()?;
        let Some(account) = accounts.get_mut(username) else {
            return Ok(AppendOutcome::AccountMissing);
        };
        Ok(if account.want_to_go_mut().push(destination) {
            AppendOutcome::Appended
        } else {
            AppendOutcome::AlreadyPresent
        })
    }
}
