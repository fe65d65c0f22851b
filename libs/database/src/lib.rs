//! Database library providing the SQL connection pool and its utilities
//!
//! Backends are chosen by the URL scheme: `sqlite://` for local files and
//! in-memory databases, `postgres://` for a server.
//!
//! # Features
//!
//! - `sql` (default) - SeaORM connection pool, migrations and health checks
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::pool;
//! use migration::Migrator;
//!
//! let db = pool::connect("sqlite://items.db?mode=rwc").await?;
//! pool::run_migrations::<Migrator>(&db, "item_api").await?;
//! ```

pub mod common;

#[cfg(feature = "sql")]
pub mod pool;

pub use common::{DatabaseError, DatabaseResult};
