use axum_helpers::server::{close_database, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use item_api::{AppState, Config, app, prepare_database};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Starting {} v{}", config.app.name, config.app.version);

    let db = database::pool::connect_from_config(config.database.clone()).await?;
    prepare_database(&db, config.app.name).await?;

    let state = AppState { config, db };
    let router = app(&state);

    info!("Starting Item API with production-ready shutdown (30s timeout)");

    let db = state.db.clone();
    create_production_app(router, &state.config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        close_database(db).await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Item API shutdown complete");
    Ok(())
}
