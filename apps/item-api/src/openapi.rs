//! OpenAPI documentation configuration

use axum_helpers::HealthResponse;
use axum_helpers::errors::responses::ServiceUnavailableResponse;
use utoipa::OpenApi;

/// Service-level routes: welcome, UI and health checks
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item API",
        version = "0.2.0",
        description = "A robust API for managing items with SQL database integration"
    ),
    paths(
        crate::api::root::read_root,
        crate::api::ui::get_ui,
        axum_helpers::server::health::health_handler,
        crate::api::health::readiness_check
    ),
    components(
        schemas(HealthResponse),
        responses(ServiceUnavailableResponse)
    ),
    tags(
        (name = "root", description = "Welcome message and item manager page"),
        (name = "health", description = "Liveness and readiness checks")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for the whole service
///
/// Item routes are already absolute, so the domain document is merged in
/// rather than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_items::ApiDoc::openapi());
        doc
    }
}
