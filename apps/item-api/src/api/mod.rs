//! API routes module
//!
//! This module defines every route the Item API serves besides the docs,
//! which `axum_helpers::create_router` mounts.

pub mod health;
pub mod items;
pub mod root;
pub mod ui;

use axum::Router;
use axum_helpers::health_router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(root::router())
        .merge(ui::router())
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .merge(items::router(state))
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
}
