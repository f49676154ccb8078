use actix_web::web;

/// # Landing Page Endpoint
///
/// Serves a fixed HTML page describing the running service and linking the
/// four endpoints.
///
/// ## Response
/// - **200 OK**: Content-Type `text/html; charset=utf-8`, static body
pub mod home;

/// # Health & Readiness Endpoints
///
/// Liveness and readiness probes for orchestration platforms.
///
/// ## Responses
/// - `GET /health` → **200 OK**: status, timestamp, version and uptime
/// - `GET /ready` → **200 OK**: status and named readiness checks
pub mod health;

/// # Application Info Endpoint
///
/// Reflects the deployment environment the service was started with.
///
/// ## Response
/// - `GET /api/info` → **200 OK**: message, application and environment
pub mod info;

/// # Route Configuration
///
/// Registers the four exact-path endpoints with the Actix-web service
/// configuration. Every path is registered method-agnostically: any HTTP
/// method receives the documented 200 response, and unregistered paths fall
/// through to Actix-web's default 404.
///
/// ## Registered Routes
///
/// ```text
/// ANY /          - Landing page (HTML)
/// ANY /health    - Health check (JSON)
/// ANY /ready     - Readiness probe (JSON)
/// ANY /api/info  - Application info (JSON)
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(home::configure_routes)
        .configure(health::configure_routes)
        .configure(info::configure_routes);
}
