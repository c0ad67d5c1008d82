//! Login, registration and logout pages.
//!
//! ```text
//! GET  /              303 -> /login
//! GET  /login         login form
//! POST /login         form {username, password}
//! GET  /registration  registration form
//! POST /register      form {username, password}
//! GET  /logout        clear session, 303 -> /login
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{Credentials, Error, LoginOutcome};
use crate::inbound::http::error::PageResult;
use crate::inbound::http::pages::{
    self, GENERIC_FAILURE_MESSAGE, Notices, REGISTERED_MESSAGE, html, see_other,
};
use crate::inbound::http::session::{LOGIN_PATH, SessionContext};
use crate::inbound::http::state::HttpState;

/// Where a successful login lands.
pub const HOME_PATH: &str = "/home";

/// Username and password submitted by the login and registration forms.
///
/// Missing fields deserialize as empty strings so they take the same path as
/// blank ones.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Message rendered for a failed attempt; store failures stay generic.
fn page_message(error: &Error) -> &str {
    if error.is_retrieval_failure() {
        warn!(code = ?error.code(), message = error.message(), "store failure during form submission");
        GENERIC_FAILURE_MESSAGE
    } else {
        error.message()
    }
}

#[get("/")]
pub async fn root() -> HttpResponse {
    see_other(LOGIN_PATH)
}

#[get("/login")]
pub async fn login_form() -> HttpResponse {
    html(StatusCode::OK, pages::login_page(Notices::default()))
}

/// Check credentials and authenticate the session.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<CredentialsForm>,
) -> PageResult<HttpResponse> {
    let current = session.auth_state()?;
    let credentials = match Credentials::for_login(&form.username, &form.password) {
        Ok(credentials) => credentials,
        Err(error) => {
            return Ok(html(
                StatusCode::OK,
                pages::login_page(Notices::error(page_message(&error))),
            ));
        }
    };

    match current.log_in(state.login.as_ref(), &credentials).await {
        LoginOutcome::Accepted(next) => {
            session.persist(&next)?;
            info!(username = %credentials.username(), "user logged in");
            Ok(see_other(HOME_PATH))
        }
        LoginOutcome::Rejected { error, .. } => Ok(html(
            StatusCode::OK,
            pages::login_page(Notices::error(page_message(&error))),
        )),
    }
}

#[get("/registration")]
pub async fn registration_form() -> HttpResponse {
    html(StatusCode::OK, pages::registration_page(None))
}

/// Create an account. Registration does not sign the user in.
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    let result = match Credentials::for_registration(&form.username, &form.password) {
        Ok(credentials) => state.registration.register(&credentials).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(_) => html(
            StatusCode::OK,
            pages::login_page(Notices::success(REGISTERED_MESSAGE)),
        ),
        Err(error) => html(
            StatusCode::OK,
            pages::registration_page(Some(page_message(&error))),
        ),
    }
}

#[get("/logout")]
pub async fn logout(session: SessionContext) -> PageResult<HttpResponse> {
    let state = session.auth_state()?;
    if let Some(username) = state.username() {
        info!(username = %username, "user logged out");
    }
    session.persist(&state.log_out())?;
    Ok(see_other(LOGIN_PATH))
}
