//! Home, category and destination pages plus the add-to-list action.
//!
//! Category and destination pages share one parameterised route. A slug is
//! resolved against the categories first, then the catalogue; anything else
//! is a 404 page.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::warn;

use crate::domain::ports::AddOutcome;
use crate::domain::{Category, Destination};
use crate::inbound::http::pages::{
    self, ADDED_MESSAGE, ALREADY_LISTED_MESSAGE, GENERIC_FAILURE_MESSAGE, Notices, html,
};
use crate::inbound::http::session::SignedIn;
use crate::inbound::http::state::HttpState;

#[get("/home")]
pub async fn home(user: SignedIn) -> HttpResponse {
    html(StatusCode::OK, pages::home_page(user.username()))
}

fn not_found(req: &HttpRequest) -> HttpResponse {
    html(StatusCode::NOT_FOUND, pages::not_found_page(req.path()))
}

/// Default service for paths no route matches.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    not_found(&req)
}

/// Category or destination page.
#[get("/{slug}")]
pub async fn page(_user: SignedIn, slug: web::Path<String>, req: HttpRequest) -> HttpResponse {
    if let Some(category) = Category::find(&slug) {
        return html(StatusCode::OK, pages::category_page(category));
    }
    match Destination::find(&slug) {
        Some(destination) => html(
            StatusCode::OK,
            pages::destination_page(destination, Notices::default()),
        ),
        None => not_found(&req),
    }
}

/// Add the destination to the signed-in user's list and re-render its page.
#[post("/{slug}/add")]
pub async fn add(
    user: SignedIn,
    state: web::Data<HttpState>,
    slug: web::Path<String>,
    req: HttpRequest,
) -> HttpResponse {
    let Some(destination) = Destination::find(&slug) else {
        return not_found(&req);
    };

    let notices = match state
        .want_to_go
        .add_destination(user.username(), destination.display_name())
        .await
    {
        Ok(AddOutcome::Added) => Notices::success(ADDED_MESSAGE),
        Ok(AddOutcome::AlreadyPresent) => Notices::error(ALREADY_LISTED_MESSAGE),
        Err(error) => {
            warn!(
                username = %user.username(),
                destination = destination.display_name(),
                code = ?error.code(),
                message = error.message(),
                "add to want-to-go list failed"
            );
            Notices::error(GENERIC_FAILURE_MESSAGE)
        }
    };
    html(StatusCode::OK, pages::destination_page(destination, notices))
}
