//! Builders for the HTTP state from the configured account store.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use wanderlist::domain::ports::AccountRepository;
use wanderlist::inbound::http::state::HttpState;
use wanderlist::outbound::memory::InMemoryAccountRepository;
use wanderlist::outbound::persistence::DieselAccountRepository;

use super::ServerConfig;

/// Pick the database-backed repository when a pool is available, otherwise
/// the in-memory fallback.
fn select_repository<Pool, R>(
    pool: &Option<Pool>,
    make_repository: impl FnOnce(&Pool) -> R,
) -> HttpState
where
    R: AccountRepository + 'static,
{
    match pool {
        Some(pool) => HttpState::from_repository(Arc::new(make_repository(pool))),
        None => {
            warn!("no database configured; accounts are kept in memory and lost on restart");
            HttpState::from_repository(Arc::new(InMemoryAccountRepository::new()))
        }
    }
}

/// Build the shared HTTP state for every worker.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(select_repository(&config.db_pool, |pool| {
        DieselAccountRepository::new(pool.clone())
    }))
}
