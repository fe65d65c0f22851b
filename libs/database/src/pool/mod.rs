//! SQL connection pool, migration runner and health checks
//!
//! SQLite is the default backend; PostgreSQL works by switching the URL.

mod config;
mod connector;
mod health;

pub use config::{PoolConfig, DEFAULT_DATABASE_URL};
pub use connector::{connect, connect_from_config, connect_with_options, run_migrations};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
