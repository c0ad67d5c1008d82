//! Registration and login services over the account repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::auth::INVALID_CREDENTIALS_MESSAGE;
use crate::domain::ports::{
    AccountPersistenceError, AccountRepository, LoginService, RegistrationService,
};
use crate::domain::{Account, Credentials, Error, Username};

/// Account service implementing the registration and login driving ports.
#[derive(Clone)]
pub struct AccountService<R> {
    accounts: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a new service over the given repository.
    pub fn new(accounts: Arc<R>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl<R> RegistrationService for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, credentials: &Credentials) -> Result<Username, Error> {
        let username = credentials.username();
        if self.accounts.find_by_username(username).await?.is_some() {
            return Err(Error::conflict("Username already exists"));
        }

        let account = Account::register(username.clone(), credentials.password().clone());
        match self.accounts.insert(&account).await {
            Ok(()) => {
                info!(username = %username, "account registered");
                Ok(username.clone())
            }
            // Another request claimed the name between the lookup and the insert.
            Err(AccountPersistenceError::Duplicate { .. }) => {
                Err(Error::conflict("Username already exists"))
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl<R> LoginService for AccountService<R>
where
    R: AccountRepository,
{
    async fn authenticate(&self, credentials: &Credentials) -> Result<Username, Error> {
        let account = self
            .accounts
            .find_by_username(credentials.username())
            .await?;

        match account {
            Some(account) if account.password_matches(credentials.password().expose()) => {
                Ok(account.username().clone())
            }
            _ => {
                warn!(username = %credentials.username(), "login rejected");
                Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE))
            }
        }
    }
}
