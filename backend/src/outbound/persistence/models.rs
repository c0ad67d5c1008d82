//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories translate them
//! into domain values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::accounts;

/// Row struct for reading from the accounts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountRow {
    pub username: String,
    pub password: String,
    pub want_to_go: Vec<String>,
    #[expect(dead_code, reason = "audit column read alongside the account")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct NewAccountRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub want_to_go: Vec<String>,
}
