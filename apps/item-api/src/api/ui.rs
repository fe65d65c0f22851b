//! Item manager page for poking at the API from a browser

use axum::{Router, response::Html, routing::get};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Item manager UI
#[utoipa::path(
    get,
    path = "/ui",
    tag = "root",
    responses((status = 200, description = "Item manager page", content_type = "text/html", body = String))
)]
pub async fn get_ui() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router {
    Router::new().route("/ui", get(get_ui))
}
