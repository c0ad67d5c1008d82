//! The signed-in user's want-to-go list page.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, web};

use crate::inbound::http::pages::{self, html};
use crate::inbound::http::session::SignedIn;
use crate::inbound::http::state::HttpState;

/// List page. Store failures degrade to an empty list.
#[get("/wanttogo")]
pub async fn want_to_go(user: SignedIn, state: web::Data<HttpState>) -> HttpResponse {
    let entries = state
        .want_to_go_query
        .list_destinations(user.username())
        .await;
    html(StatusCode::OK, pages::want_to_go_page(&entries))
}
