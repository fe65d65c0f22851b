//! Items API routes
//!
//! This module wires up the items domain to HTTP routes.

use axum::Router;
use domain_items::{ItemService, SqlItemRepository, handlers};

use crate::state::AppState;

/// Create items router
pub fn router(state: &AppState) -> Router {
    let repository = SqlItemRepository::new(state.db.clone());
    let service = ItemService::new(repository);

    handlers::router(service)
}
