//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, Username};

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create an account with an empty want-to-go list.
    ///
    /// Returns `Conflict` when the username is taken. Registration does not
    /// authenticate the caller.
    async fn register(&self, credentials: &Credentials) -> Result<Username, Error>;
}
