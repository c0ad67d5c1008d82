//! Catalogue search results page.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::search;
use crate::inbound::http::pages::{self, html};
use crate::inbound::http::session::SignedIn;

/// Search form body; the field is named `Search`.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(rename = "Search", default)]
    pub query: String,
}

#[post("/search")]
pub async fn search_destinations(_user: SignedIn, form: web::Form<SearchForm>) -> HttpResponse {
    let outcome = search(&form.query);
    debug!(query = %form.query, matches = outcome.destinations().len(), "catalogue searched");
    html(StatusCode::OK, pages::search_page(&outcome))
}
