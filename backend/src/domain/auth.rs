//! Authentication primitives: submitted credentials and the session state
//! machine.
//!
//! The gate never mutates session storage. It takes the current
//! [`AuthState`] by value and hands back the next one; inbound adapters are
//! responsible for persisting whatever state they receive.

use crate::domain::ports::LoginService;
use crate::domain::{AccountValidationError, Error, Password, Username};

/// Message rendered when registration fields are blank.
pub const EMPTY_CREDENTIALS_MESSAGE: &str = "Username and password cannot be empty";
/// Message rendered for any failed credential check.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Validated username/password pair submitted by a browser form.
///
/// # Examples
/// ```
/// use wanderlist::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("ada", "pw").unwrap();
/// assert_eq!(creds.username().as_ref(), "ada");
/// assert_eq!(creds.password().expose(), "pw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Construct credentials from raw form inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, AccountValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Construct credentials for registration, mapping blank fields to an
    /// `InvalidRequest` error carrying the page message.
    pub fn for_registration(username: &str, password: &str) -> Result<Self, Error> {
        Self::try_from_parts(username, password)
            .map_err(|_| Error::invalid_request(EMPTY_CREDENTIALS_MESSAGE))
    }

    /// Construct credentials for login. Blank fields are reported exactly
    /// like a failed credential check.
    pub fn for_login(username: &str, password: &str) -> Result<Self, Error> {
        Self::try_from_parts(username, password)
            .map_err(|_| Error::unauthorized(INVALID_CREDENTIALS_MESSAGE))
    }

    /// Submitted username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Submitted password.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Authentication state for one browser session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// No account is associated with the session.
    #[default]
    Anonymous,
    /// The session belongs to the named account.
    Authenticated(Username),
}

/// Result of a login attempt.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Credentials matched; the session moves to the returned state.
    Accepted(AuthState),
    /// Credentials were rejected or could not be checked. `state` is the
    /// unchanged input state.
    Rejected {
        /// State to keep persisting.
        state: AuthState,
        /// Reason for the rejection.
        error: Error,
    },
}

impl AuthState {
    /// Username of the authenticated account, if any.
    pub fn username(&self) -> Option<&Username> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(username) => Some(username),
        }
    }

    /// Whether the session is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Attempt the `Anonymous -> Authenticated` transition.
    pub async fn log_in(self, login: &dyn LoginService, credentials: &Credentials) -> LoginOutcome {
        match login.authenticate(credentials).await {
            Ok(username) => LoginOutcome::Accepted(Self::Authenticated(username)),
            Err(error) => LoginOutcome::Rejected { state: self, error },
        }
    }

    /// The `Authenticated -> Anonymous` transition.
    pub fn log_out(self) -> Self {
        Self::Anonymous
    }
}
