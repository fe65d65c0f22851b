use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PoolConfig;

/// Connect with the default pool settings
///
/// # Example
/// ```ignore
/// use database::pool::connect;
///
/// let db = connect("sqlite://items.db?mode=rwc").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(PoolConfig::new(database_url)).await
}

/// Connect using a PoolConfig
///
/// This is the recommended way to connect when using configuration.
///
/// ```ignore
/// use database::pool::{PoolConfig, connect_from_config};
/// use core_config::FromEnv;
///
/// let config = PoolConfig::from_env()?;
/// let db = connect_from_config(config).await?;
/// ```
pub async fn connect_from_config(config: PoolConfig) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();
    connect_with_options(options).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Run database migrations using the provided Migrator
///
/// # Arguments
/// * `db` - Database connection
/// * `app_name` - Name of the app for logging (e.g., "item_api")
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::Migrator;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    async fn memory_db() -> DatabaseConnection {
        connect_from_config(PoolConfig::with_pool_size("sqlite::memory:", 1, 1))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_connect_sqlite_memory() {
        let db = memory_db().await;
        assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    }

    #[tokio::test]
    async fn test_run_migrations_creates_items_table() {
        let db = memory_db().await;
        run_migrations::<Migrator>(&db, "test").await.unwrap();

        let row = db
            .query_one_raw(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS n FROM items".to_owned(),
            ))
            .await
            .unwrap()
            .unwrap();
        let n: i64 = row.try_get("", "n").unwrap();
        assert_eq!(n, 0);
    }

    #[tokio::test]
    async fn test_run_migrations_is_idempotent() {
        let db = memory_db().await;
        run_migrations::<Migrator>(&db, "test").await.unwrap();
        run_migrations::<Migrator>(&db, "test").await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_invalid_url_fails() {
        let result = connect("notadb://nowhere").await;
        assert!(result.is_err());
    }
}
