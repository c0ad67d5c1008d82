//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`AccountRepository`) are implemented by outbound adapters.
//! Driving ports (`LoginService`, `RegistrationService`, `WantToGoCommand`,
//! `WantToGoQuery`) are implemented by domain services and called by inbound
//! adapters.

mod account_repository;
mod login_service;
mod registration_service;
mod want_to_go_command;
mod want_to_go_query;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountPersistenceError, AccountRepository, AppendOutcome};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use want_to_go_command::MockWantToGoCommand;
pub use want_to_go_command::{AddOutcome, WantToGoCommand};
#[cfg(test)]
pub use want_to_go_query::MockWantToGoQuery;
pub use want_to_go_query::WantToGoQuery;
