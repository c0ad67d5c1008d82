//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows and domain values and map
//! every database failure onto the port's error type. Rows (`models.rs`) and
//! table definitions (`schema.rs`) stay private to this module.
//!
//! # Example
//!
//! ```no_run
//! use wanderlist::outbound::persistence::{DbPool, DieselAccountRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/wanderlist")).await?;
//! let repo = DieselAccountRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_account_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations, run_migrations_blocking};
pub use pool::{DbPool, PoolConfig, PoolError};
