//! Driven port for account persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Account, Error, Username};

/// Persistence errors raised by account repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountPersistenceError {
    /// Repository connection could not be established.
    #[error("account repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("account repository query failed: {message}")]
    Query { message: String },
    /// An account with the same username already exists.
    #[error("account already exists: {username}")]
    Duplicate { username: String },
}

impl AccountPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a duplicate-key error for `username`.
    pub fn duplicate(username: impl Into<String>) -> Self {
        Self::Duplicate {
            username: username.into(),
        }
    }
}

impl From<AccountPersistenceError> for Error {
    fn from(value: AccountPersistenceError) -> Self {
        match value {
            AccountPersistenceError::Connection { message } => Error::service_unavailable(message),
            AccountPersistenceError::Query { message } => Error::internal(message),
            AccountPersistenceError::Duplicate { .. } => Error::conflict("Username already exists"),
        }
    }
}

/// Result of a conditional list append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The name was appended to the end of the list.
    Appended,
    /// The name was already on the list; nothing changed.
    AlreadyPresent,
    /// No account with the given username exists.
    AccountMissing,
}

/// Account store keyed by username.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fetch an account by exact username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountPersistenceError>;

    /// Insert a new account. Fails with [`AccountPersistenceError::Duplicate`]
    /// when the username is taken.
    async fn insert(&self, account: &Account) -> Result<(), AccountPersistenceError>;

    /// Append `destination` to the account's want-to-go list unless it is
    /// already present. Implementations perform the membership check and the
    /// append atomically.
    async fn append_want_to_go(
        &self,
        username: &Username,
        destination: &str,
    ) -> Result<AppendOutcome, AccountPersistenceError>;
}
