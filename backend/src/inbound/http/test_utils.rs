//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};

use crate::domain::ports::AccountRepository as _;
use crate::domain::{Account, Password, Username};
use crate::inbound::http::session_config::SESSION_COOKIE_NAME;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::memory::InMemoryAccountRepository;

/// Session middleware for tests: fresh key, cookie named `session`, and
/// `Secure` disabled for plain HTTP.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_secure(false)
        .build()
}

/// In-memory repository pre-populated with `(username, password)` accounts.
pub async fn seeded_repository(accounts: &[(&str, &str)]) -> Arc<InMemoryAccountRepository> {
    let repo = Arc::new(InMemoryAccountRepository::new());
    for (username, password) in accounts {
        let account = Account::register(
            Username::new(*username).expect("fixture username"),
            Password::new(*password).expect("fixture password"),
        );
        repo.insert(&account).await.expect("seed account");
    }
    repo
}

/// HTTP state backed by a seeded in-memory repository.
pub async fn seeded_state(accounts: &[(&str, &str)]) -> (HttpState, Arc<InMemoryAccountRepository>) {
    let repo = seeded_repository(accounts).await;
    (HttpState::from_repository(Arc::clone(&repo)), repo)
}

/// Every page route with test session middleware and tracing.
pub fn page_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .wrap(Trace)
        .configure(crate::inbound::http::configure)
}

/// The session cookie set by `res`.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Log in through `POST /login` and return the authenticated session cookie.
pub async fn sign_in<S, B>(app: &S, username: &str, password: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/login")
            .set_form([("username", username), ("password", password)])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), actix_web::http::StatusCode::SEE_OTHER, "login failed");
    session_cookie(&res)
}
