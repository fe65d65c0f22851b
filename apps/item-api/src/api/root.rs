use axum::{Json, Router, routing::get};
use domain_items::MessageResponse;

/// Welcome endpoint
///
/// Returns a welcome message, handy for checking the API is up.
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Welcome message", body = MessageResponse))
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Item API"))
}

pub fn router() -> Router {
    Router::new().route("/", get(read_root))
}
