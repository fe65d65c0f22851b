use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Check database health
///
/// Executes `SELECT 1` against whichever backend the pool is connected to.
/// Used by the readiness check.
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    let backend = db.get_database_backend();
    debug!(?backend, "Running database health check");

    let stmt = Statement::from_string(backend, "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("{:?}: {}", backend, e)))?;

    debug!("Database health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{connect_from_config, PoolConfig};

    #[tokio::test]
    async fn test_check_health_sqlite_memory() {
        let db = connect_from_config(PoolConfig::with_pool_size("sqlite::memory:", 1, 1))
            .await
            .unwrap();
        assert!(check_health(&db).await.is_ok());
    }
}
