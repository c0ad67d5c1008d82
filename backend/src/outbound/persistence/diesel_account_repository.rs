//! PostgreSQL-backed `AccountRepository` implementation using Diesel ORM.
//!
//! List appends run as one conditional `UPDATE`, so the membership check and
//! the write cannot interleave with a concurrent add of the same name.

use async_trait::async_trait;
use diesel::dsl::not;
use diesel::prelude::*;
use diesel::sql_types::{Array, Text};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{AccountPersistenceError, AccountRepository, AppendOutcome};
use crate::domain::{Account, Password, Username, WantToGoList};

use super::models::{AccountRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

diesel::define_sql_function! {
    /// PostgreSQL `array_append(anyarray, anyelement)` over text arrays.
    fn array_append(array: Array<Text>, element: Text) -> Array<Text>;
}

/// Diesel-backed implementation of the `AccountRepository` port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            AccountPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to account persistence errors.
///
/// `username` identifies the row being written so unique violations can be
/// reported as duplicates.
fn map_diesel_error(error: diesel::result::Error, username: &str) -> AccountPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            AccountPersistenceError::duplicate(username)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AccountPersistenceError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => AccountPersistenceError::query("database query error"),
        _ => AccountPersistenceError::query("database error"),
    }
}

fn row_to_account(row: AccountRow) -> Result<Account, AccountPersistenceError> {
    let username = Username::new(row.username)
        .map_err(|err| AccountPersistenceError::query(format!("stored username: {err}")))?;
    let password = Password::new(row.password)
        .map_err(|err| AccountPersistenceError::query(format!("stored password: {err}")))?;
    Ok(Account::from_parts(
        username,
        password,
        WantToGoList::from_entries(row.want_to_go),
    ))
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AccountRow> = accounts::table
            .filter(accounts::username.eq(username.as_ref()))
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, username.as_ref()))?;

        row.map(row_to_account).transpose()
    }

    async fn insert(&self, account: &Account) -> Result<(), AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAccountRow {
            username: account.username().as_ref(),
            password: account.password().expose(),
            want_to_go: account.want_to_go().as_slice().to_vec(),
        };

        diesel::insert_into(accounts::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, account.username().as_ref()))?;
        Ok(())
    }

    async fn append_want_to_go(
        &self,
        username: &Username,
        destination: &str,
    ) -> Result<AppendOutcome, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            accounts::table
                .filter(accounts::username.eq(username.as_ref()))
                .filter(not(accounts::want_to_go.contains(vec![destination.to_owned()]))),
        )
        .set(accounts::want_to_go.eq(array_append(accounts::want_to_go, destination)))
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, username.as_ref()))?;

        if updated > 0 {
            return Ok(AppendOutcome::Appended);
        }

        // Nothing changed: either the name was listed or the account is gone.
        let exists: i64 = accounts::table
            .filter(accounts::username.eq(username.as_ref()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, username.as_ref()))?;

        Ok(if exists > 0 {
            AppendOutcome::AlreadyPresent
        } else {
            AppendOutcome::AccountMissing
        })
    }
}
