//! Per-request correlation logging.
//!
//! Every request gets a fresh UUID v4. Two events are emitted inside a
//! `request` span carrying that id, so anything logged by handlers in between
//! is correlated as well:
//!
//! ```text
//! Request started | ID: 9b2c... | Path: /items/
//! Request completed | ID: 9b2c... | Time: 1.84ms
//! ```

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Logs the start and completion of each request.
///
/// The request and response pass through untouched.
///
/// # Example
/// ```ignore
/// use axum::{middleware, Router};
/// use axum_helpers::http::request_logging;
///
/// let app = Router::new().layer(middleware::from_fn(request_logging));
/// ```
pub async fn request_logging(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let path = req.uri().path().to_owned();
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %path,
    );

    async move {
        let started = Instant::now();
        info!("Request started | ID: {} | Path: {}", request_id, path);

        let response = next.run(req).await;

        info!(
            status = response.status().as_u16(),
            "Request completed | ID: {} | Time: {}ms",
            request_id,
            format_elapsed_ms(started)
        );
        response
    }
    .instrument(span)
    .await
}

/// Milliseconds since `started`, two decimal places.
fn format_elapsed_ms(started: Instant) -> String {
    format!("{:.2}", started.elapsed().as_secs_f64() * 1000.0)
}
