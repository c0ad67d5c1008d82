//! Domain primitives, aggregates and services.
//!
//! Purpose: Define the account aggregate, the fixed destination catalogue,
//! the authentication state machine and the services implementing the
//! driving ports. Nothing here knows about HTTP or SQL; adapters live under
//! `inbound` and `outbound`.
//!
//! Public surface:
//! - Account, Username, Password, WantToGoList: account aggregate values.
//! - AuthState, Credentials, LoginOutcome: the authentication gate.
//! - CATALOGUE, Category, Destination, search, SearchOutcome: browsing.
//! - Error, ErrorCode: transport-agnostic failures.
//! - AccountService, WantToGoService: port implementations.

pub mod account;
pub mod account_service;
pub mod auth;
pub mod catalogue;
pub mod error;
pub mod ports;
pub mod search;
pub mod trace_id;
pub mod want_to_go_service;

pub use self::account::{Account, AccountValidationError, Password, Username, WantToGoList};
pub use self::account_service::AccountService;
pub use self::auth::{
    AuthState, Credentials, EMPTY_CREDENTIALS_MESSAGE, INVALID_CREDENTIALS_MESSAGE, LoginOutcome,
};
pub use self::catalogue::{CATALOGUE, Category, Destination};
pub use self::error::{Error, ErrorCode};
pub use self::search::{SearchOutcome, search};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::want_to_go_service::WantToGoService;
