//! Shared helper utilities for integration tests.
//!
//! Integration tests compile as separate crates, so helpers shared between
//! suites live here and are pulled in with `mod support;`.

pub mod pg_embed;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

/// Returns true when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes`
/// (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Report an embedded cluster failure.
///
/// Returns `None` with a skip marker when `SKIP_TEST_CLUSTER` is truthy and
/// panics otherwise, so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Render a `postgres` error with its SQLSTATE and message.
///
/// `Display` for `postgres::Error` collapses server errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    match error.as_db_error() {
        Some(db_error) => {
            let mut summary = format!("postgres error {:?}: {}", db_error.code(), db_error.message());
            if let Some(detail) = db_error.detail() {
                summary.push_str("; detail: ");
                summary.push_str(detail);
            }
            summary
        }
        None => error.to_string(),
    }
}

/// Create an empty, uniquely named database and return its URL.
pub fn fresh_database(cluster: &TestCluster) -> Result<String, String> {
    let name = format!("wanderlist_test_{}", Uuid::new_v4().simple());
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(cluster.connection().database_url(&name))
}

/// Drop the `accounts` table to simulate schema loss.
pub fn drop_accounts_table(url: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute("DROP TABLE IF EXISTS accounts;")
        .map_err(|err| format_postgres_error(&err))
}
