//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountRepository, LoginService, RegistrationService, WantToGoCommand, WantToGoQuery,
};
use crate::domain::{AccountService, WantToGoService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub want_to_go: Arc<dyn WantToGoCommand>,
    pub want_to_go_query: Arc<dyn WantToGoQuery>,
}

impl HttpState {
    /// Wire every port to the domain services over one account repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use wanderlist::inbound::http::state::HttpState;
    /// use wanderlist::outbound::memory::InMemoryAccountRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryAccountRepository::new()));
    /// let _login = state.login.clone();
    /// ```
    pub fn from_repository<R>(accounts: Arc<R>) -> Self
    where
        R: AccountRepository + 'static,
    {
        let account_service = Arc::new(AccountService::new(Arc::clone(&accounts)));
        let want_to_go_service = Arc::new(WantToGoService::new(accounts));
        Self {
            login: account_service.clone(),
            registration: account_service,
            want_to_go: want_to_go_service.clone(),
            want_to_go_query: want_to_go_service,
        }
    }
}
