use sea_orm::DatabaseConnection;
use tracing::{error, info};

/// Closes the connection pool, logging rather than propagating failures.
///
/// Meant to run as the cleanup future of `create_production_app`.
pub async fn close_database(db: DatabaseConnection) {
    info!("Closing database connection pool");
    match db.close().await {
        Ok(()) => info!("Database connection pool closed"),
        Err(e) => error!("Failed to close database connection pool: {}", e),
    }
}
