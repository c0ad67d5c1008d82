//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call this port to check credentials without knowing the
//! backing store, so handler tests can substitute a double.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, Username};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check credentials and return the authenticated username.
    ///
    /// Unknown usernames and wrong passwords both yield the same
    /// `Unauthorized` error.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Username, Error>;
}
