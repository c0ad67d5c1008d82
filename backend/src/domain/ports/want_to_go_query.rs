//! Driving port for reading want-to-go lists.

use async_trait::async_trait;

use crate::domain::Username;

/// Use-case port for listing destinations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WantToGoQuery: Send + Sync {
    /// Destinations in insertion order. Missing accounts and store failures
    /// yield an empty list.
    async fn list_destinations(&self, username: &Username) -> Vec<String>;
}
