//! Driving port for want-to-go list mutations.

use async_trait::async_trait;

use crate::domain::{Error, Username};

/// Outcome of adding a destination to a want-to-go list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The destination was appended.
    Added,
    /// The destination was already listed; nothing changed.
    AlreadyPresent,
}

/// Use-case port for adding destinations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WantToGoCommand: Send + Sync {
    /// Add `destination` to the user's list. Repeated adds are no-ops.
    async fn add_destination(
        &self,
        username: &Username,
        destination: &str,
    ) -> Result<AddOutcome, Error>;
}
