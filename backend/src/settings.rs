//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `WANDERLIST_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

/// Address used when no bind address is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The bind address is not a `host:port` socket address.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Runtime settings for the HTTP server and its account store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WANDERLIST")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Accounts are kept in memory without one.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Seconds to wait for a pooled connection before failing a request.
    pub db_connect_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Parse the configured bind address, falling back to
    /// [`DEFAULT_BIND_ADDR`].
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    /// Pool settings when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?;
        let mut config = PoolConfig::new(url);
        if let Some(max) = self.db_max_connections {
            config = config.with_max_size(max);
        }
        if let Some(secs) = self.db_connect_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings loading.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "WANDERLIST_BIND_ADDR",
        "WANDERLIST_DATABASE_URL",
        "WANDERLIST_DB_MAX_CONNECTIONS",
        "WANDERLIST_DB_CONNECT_TIMEOUT_SECS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("wanderlist")]).expect("config should load")
    }

    #[rstest]
    fn defaults_to_in_memory_store_on_port_3000() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default addr"),
            "0.0.0.0:3000".parse::<SocketAddr>().expect("socket addr")
        );
        assert!(settings.pool_config().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("WANDERLIST_BIND_ADDR", Some("127.0.0.1:8080".to_owned())),
            (
                "WANDERLIST_DATABASE_URL",
                Some("postgres://localhost/wanderlist".to_owned()),
            ),
            ("WANDERLIST_DB_MAX_CONNECTIONS", Some("3".to_owned())),
            ("WANDERLIST_DB_CONNECT_TIMEOUT_SECS", None),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("addr"),
            "127.0.0.1:8080".parse::<SocketAddr>().expect("socket addr")
        );
        let pool = settings.pool_config().expect("pool config");
        assert_eq!(pool.database_url(), "postgres://localhost/wanderlist");
        assert_eq!(pool.max_size(), 3);
    }

    #[rstest]
    fn malformed_bind_address_is_reported() {
        let settings = AppSettings {
            bind_addr: Some("not-an-addr".to_owned()),
            database_url: None,
            db_max_connections: None,
            db_connect_timeout_secs: None,
        };
        let err = settings.bind_addr().expect_err("invalid addr");
        assert!(matches!(err, SettingsError::InvalidBindAddr { ref value, .. } if value == "not-an-addr"));
    }
}
