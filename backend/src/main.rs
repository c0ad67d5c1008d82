//! Wanderlist entry-point: loads settings, prepares the account store and
//! serves the site.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context as _, Result};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::ServerConfig;
use wanderlist::inbound::http::health::HealthState;
use wanderlist::inbound::http::session_config::{
    BuildMode, fingerprint::key_fingerprint, session_settings_from_env,
};
use wanderlist::outbound::persistence::{DbPool, run_migrations};
use wanderlist::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("load settings")?;
    let bind_addr = settings.bind_addr()?;

    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("configure sessions")?;
    info!(
        fingerprint = %key_fingerprint(&session.key),
        cookie_secure = session.cookie_secure,
        same_site = ?session.same_site,
        "session key loaded"
    );

    let mut config = ServerConfig::new(session, bind_addr);
    match settings.pool_config() {
        Some(pool_config) => {
            run_migrations(pool_config.database_url())
                .await
                .wrap_err("apply database migrations")?;
            let pool = DbPool::new(pool_config)
                .await
                .wrap_err("build database pool")?;
            info!("using PostgreSQL account store");
            config = config.with_db_pool(pool);
        }
        None => warn!("WANDERLIST_DATABASE_URL not set; using in-memory account store"),
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result.wrap_err("server terminated")
}
