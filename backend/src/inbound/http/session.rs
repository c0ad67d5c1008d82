//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! [`SessionContext`] loads and stores the domain [`AuthState`]; the
//! [`SignedIn`] extractor guards protected pages by redirecting anonymous
//! sessions to `/login`.

use actix_session::Session;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AuthState, Error, Username};
use crate::inbound::http::pages::see_other;

pub(crate) const USERNAME_KEY: &str = "username";

/// Path anonymous visitors are redirected to.
pub const LOGIN_PATH: &str = "/login";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Current authentication state.
    ///
    /// A stored username that no longer validates is treated as anonymous.
    pub fn auth_state(&self) -> Result<AuthState, Error> {
        let stored = self
            .0
            .get::<String>(USERNAME_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        let Some(raw) = stored else {
            return Ok(AuthState::Anonymous);
        };
        match Username::new(raw) {
            Ok(username) => Ok(AuthState::Authenticated(username)),
            Err(error) => {
                warn!(%error, "invalid username in session cookie");
                Ok(AuthState::Anonymous)
            }
        }
    }

    /// Persist `state` into the session cookie.
    ///
    /// Authenticating renews the session identifier; going anonymous purges
    /// the session entirely.
    pub fn persist(&self, state: &AuthState) -> Result<(), Error> {
        match state {
            AuthState::Authenticated(username) => {
                self.0.renew();
                self.0
                    .insert(USERNAME_KEY, username.as_ref())
                    .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
            }
            AuthState::Anonymous => {
                self.0.purge();
                Ok(())
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

/// Username of the signed-in account, extracted from the session.
///
/// Extraction fails with a `303 See Other` to [`LOGIN_PATH`] when the
/// session is anonymous.
#[derive(Debug, Clone)]
pub struct SignedIn(pub Username);

impl SignedIn {
    /// The signed-in username.
    pub fn username(&self) -> &Username {
        &self.0
    }
}

impl FromRequest for SignedIn {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = SessionContext::from_request(req, payload);
        Box::pin(async move {
            let session = fut.await?;
            match session.auth_state()? {
                AuthState::Authenticated(username) => Ok(SignedIn(username)),
                AuthState::Anonymous => {
                    Err(InternalError::from_response("login required", see_other(LOGIN_PATH))
                        .into())
                }
            }
        })
    }
}
