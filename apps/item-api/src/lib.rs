//! Item API
//!
//! CRUD over a single `items` table plus a small browser UI.
//!
//! ```text
//! main ─▶ Config::from_env ─▶ connect ─▶ prepare_database ─▶ app ─▶ serve
//!                                         (migrate + seed)
//! ```
//!
//! The pieces are exposed as a library so tests can build the full router
//! against an in-memory database.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use domain_items::{ItemService, SqlItemRepository, seed_default_items};
use migration::Migrator;
use sea_orm::DatabaseConnection;
use tracing::info;

pub use config::Config;
pub use state::AppState;

/// Builds the complete application router: API routes, docs, fallbacks and
/// request logging.
pub fn app(state: &AppState) -> Router {
    axum_helpers::create_router::<openapi::ApiDoc>(api::routes(state))
}

/// Creates the schema if needed, then seeds the demo rows into an empty table.
///
/// Returns how many rows were seeded.
pub async fn prepare_database(db: &DatabaseConnection, app_name: &str) -> eyre::Result<u64> {
    database::pool::run_migrations::<Migrator>(db, app_name).await?;

    let service = ItemService::new(SqlItemRepository::new(db.clone()));
    let seeded = seed_default_items(&service).await?;

    info!(seeded, "Database ready");
    Ok(seeded)
}
