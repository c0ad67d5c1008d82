//! HTTP inbound adapter serving the server-rendered pages.
//!
//! Routes are registered through [`configure`]. The parameterised slug
//! routes go last so they never shadow a fixed path.

pub mod auth;
pub mod destinations;
pub mod error;
pub mod health;
pub mod pages;
pub mod search;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod want_to_go;

use actix_web::web;

pub use error::PageResult;

/// Register every page route on `cfg`.
///
/// Health probes are not included. The server registers them alongside these
/// routes, behind the same session middleware; they never touch the session.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::root)
        .service(auth::login_form)
        .service(auth::login)
        .service(auth::registration_form)
        .service(auth::register)
        .service(auth::logout)
        .service(destinations::home)
        .service(want_to_go::want_to_go)
        .service(search::search_destinations)
        .service(destinations::add)
        .service(destinations::page)
        .default_service(web::to(destinations::fallback));
}
