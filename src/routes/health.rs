use crate::models::{HealthResponse, ReadinessResponse};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp,
/// the advertised version and the elapsed uptime.
///
/// ## Response
///
/// - **200 OK**: Service is healthy (this handler has no failure path)
///   - Body: JSON object with `status` ("healthy"), `timestamp` in ISO 8601
///     format, `version` ("1.0.0") and `uptime` (e.g. "1m30s")
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2023-10-05T12:34:56.789+00:00",
///   "version": "1.0.0",
///   "uptime": "5s"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Probes"
)]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy(state.uptime()))
}

/// # Readiness Probe Endpoint
///
/// Reports whether the service is ready to accept traffic, with a map of
/// named checks. The only check is the server itself.
///
/// ## Example Response
///
/// ```json
/// { "status": "ready", "checks": { "server": "ok" } }
/// ```
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse)
    ),
    tag = "Probes"
)]
pub async fn ready() -> impl Responder {
    HttpResponse::Ok().json(ReadinessResponse::ready())
}

/// # Route Configuration
///
/// Registers the probe endpoints, accepting any HTTP method.
///
/// ## Currently Configured Routes
///
/// - `ANY /health`: Health check endpoint
/// - `ANY /ready`: Readiness probe endpoint
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/health", web::route().to(health))
        .route("/ready", web::route().to(ready));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use actix_web::{App, test, web::Data};
    use chrono::DateTime;
    use serde_json::{Value, json};

    fn test_state() -> Data<AppState> {
        Data::new(AppState::new(&AppConfig::default()))
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let body = test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).expect("Body should be valid JSON");

        assert_eq!(body_json["status"], "healthy");
        assert_eq!(body_json["version"], "1.0.0");

        // Fresh state, so uptime is still in the seconds-only form
        let uptime = body_json["uptime"].as_str().expect("uptime is a string");
        assert!(uptime.ends_with('s'), "Uptime should be a duration string");

        // Make sure the timestamp is a valid ISO 8601 date
        let timestamp = body_json["timestamp"]
            .as_str()
            .expect("Timestamp should be a string");
        let _dt = DateTime::parse_from_rfc3339(timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");
    }

    #[actix_web::test]
    async fn test_ready_endpoint_exact_body() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).expect("Body should be valid JSON");
        assert_eq!(body_json, json!({"status": "ready", "checks": {"server": "ok"}}));
    }

    #[actix_web::test]
    async fn test_probes_accept_any_method() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200, "POST should behave like GET");

        let req = test::TestRequest::delete().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200, "DELETE should behave like GET");
    }
}
