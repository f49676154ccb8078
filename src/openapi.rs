use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros, served through Swagger UI at `/swagger-ui/`.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Readiness Probe: `GET /ready`
/// - Application Info: `GET /api/info`
///
/// The HTML landing page at `/` is not part of the JSON API surface and is
/// intentionally left out of this document.
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::health::ready,
        crate::routes::info::info,
    ),
    components(
        schemas(
            crate::models::HealthResponse,
            crate::models::ReadinessResponse,
            crate::models::AppInfoResponse
        )
    ),
    tags(
        (name = "Probes", description = "Liveness and readiness endpoints"),
        (name = "Info", description = "Application metadata endpoints")
    ),
    info(
        description = "Minimal demonstration service with health, readiness and info endpoints",
        title = "S2I Demo API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
