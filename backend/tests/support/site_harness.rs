//! In-process server harness and shared world for site journeys.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The `WorldFixture` stops the server
//! even if a scenario panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use actix_web::dev::ServerHandle;
use actix_web::http::header;
use actix_web::{App, HttpServer, web};
use awc::Client;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;
use wanderlist::Trace;
use wanderlist::domain::TRACE_ID_HEADER;
use wanderlist::inbound::http::configure;
use wanderlist::inbound::http::session_config::SessionSettings;
use wanderlist::inbound::http::state::HttpState;
use wanderlist::outbound::memory::InMemoryAccountRepository;

pub(crate) struct SiteWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_location: Option<String>,
    pub(crate) last_body: Option<String>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) session_cookie: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<SiteWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(&self.world);
    }
}

fn shutdown(world: &SharedWorld) {
    // The future must not borrow the world; `block_on` holds the borrow.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

/// Captured parts of one response.
pub(crate) struct Exchange {
    pub(crate) status: u16,
    pub(crate) location: Option<String>,
    pub(crate) trace_id: Option<String>,
    pub(crate) set_cookie: Option<String>,
    pub(crate) body: String,
}

/// A request to send: method, path and optional form fields.
pub(crate) struct PageRequest<'a> {
    pub(crate) post: bool,
    pub(crate) path: &'a str,
    pub(crate) form: Vec<(&'a str, String)>,
}

fn header_string(headers: &header::HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Send `request` with the stored session cookie and record the outcome.
///
/// A `Set-Cookie` for the session replaces the stored cookie.
pub(crate) fn send(world: &SharedWorld, request: PageRequest<'_>) {
    let exchange = {
        let ctx = world.borrow();
        let url = format!("{}{}", ctx.base_url, request.path);
        let cookie = ctx.session_cookie.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            let client = Client::builder().disable_redirects().finish();
            let mut builder = if request.post {
                client.post(url)
            } else {
                client.get(url)
            };
            if let Some(cookie) = cookie {
                builder = builder.insert_header((header::COOKIE, cookie));
            }
            let mut response = if request.post {
                builder.send_form(&request.form).await
            } else {
                builder.send().await
            }
            .expect("page request");

            let headers = response.headers().clone();
            let body = response.body().await.expect("response body");
            Exchange {
                status: response.status().as_u16(),
                location: header_string(&headers, header::LOCATION.as_str()),
                trace_id: header_string(&headers, TRACE_ID_HEADER),
                set_cookie: header_string(&headers, header::SET_COOKIE.as_str()),
                body: String::from_utf8(body.to_vec()).expect("utf8 body"),
            }
        })
    };

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(exchange.status);
    ctx.last_location = exchange.location;
    ctx.last_trace_id = exchange.trace_id;
    ctx.last_body = Some(exchange.body);
    if let Some(set_cookie) = exchange.set_cookie {
        let pair = set_cookie
            .split(';')
            .next()
            .expect("cookie pair")
            .to_owned();
        ctx.session_cookie = Some(pair);
    }
}

async fn spawn_site_server(http_state: HttpState) -> Result<(String, ServerHandle), String> {
    let session = SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    };
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let http_data = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .wrap(session.middleware())
            .wrap(Trace)
            .configure(configure)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();
    let http_state = HttpState::from_repository(Arc::new(InMemoryAccountRepository::new()));

    let (base_url, server) = local
        .block_on(&runtime, spawn_site_server(http_state))
        .expect("spawn site server");

    WorldFixture {
        world: Rc::new(RefCell::new(SiteWorld {
            runtime,
            local,
            base_url,
            server,
            last_status: None,
            last_location: None,
            last_body: None,
            last_trace_id: None,
            session_cookie: None,
        })),
    }
}
