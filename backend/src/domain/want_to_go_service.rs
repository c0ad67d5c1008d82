//! Want-to-go list management over the account repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    AccountRepository, AddOutcome, AppendOutcome, WantToGoCommand, WantToGoQuery,
};
use crate::domain::{Error, Username};

/// Want-to-go service implementing the list command and query ports.
#[derive(Clone)]
pub struct WantToGoService<R> {
    accounts: Arc<R>,
}

impl<R> WantToGoService<R> {
    /// Create a new service over the given repository.
    pub fn new(accounts: Arc<R>) -> Self {
        Self { accounts }
    }
}

fn account_missing(username: &Username) -> Error {
    Error::not_found(format!("account {username} not found"))
}

#[async_trait]
impl<R> WantToGoCommand for WantToGoService<R>
where
    R: AccountRepository,
{
    async fn add_destination(
        &self,
        username: &Username,
        destination: &str,
    ) -> Result<AddOutcome, Error> {
        let account = self
            .accounts
            .find_by_username(username)
            .await?
            .ok_or_else(|| account_missing(username))?;

        if account.want_to_go().contains(destination) {
            debug!(username = %username, destination, "destination already listed");
            return Ok(AddOutcome::AlreadyPresent);
        }

        // The repository re-checks membership inside the write, so a
        // concurrent add of the same name still lands once.
        match self
            .accounts
            .append_want_to_go(username, destination)
            .await?
        {
            AppendOutcome::Appended => {
                debug!(username = %username, destination, "destination added");
                Ok(AddOutcome::Added)
            }
            AppendOutcome::AlreadyPresent => Ok(AddOutcome::AlreadyPresent),
            AppendOutcome::AccountMissing => Err(account_missing(username)),
        }
    }
}

#[async_trait]
impl<R> WantToGoQuery for WantToGoService<R>
where
    R: AccountRepository,
{
    async fn list_destinations(&self, username: &Username) -> Vec<String> {
        match self.accounts.find_by_username(username).await {
            Ok(Some(account)) => account.want_to_go().as_slice().to_vec(),
            Ok(None) => {
                warn!(username = %username, "want-to-go list requested for missing account");
                Vec::new()
            }
            Err(error) => {
                warn!(username = %username, error = %error, "failed to load want-to-go list");
                Vec::new()
            }
        }
    }
}
