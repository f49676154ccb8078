use crate::models::AppInfoResponse;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};

/// # Application Info Endpoint
///
/// Returns fixed application metadata plus the deployment environment the
/// service was configured with at startup.
///
/// ## Response
///
/// - **200 OK**: JSON object with `message`, `application` ("s2i-go-demo")
///   and `environment` (`ENVIRONMENT` variable, default "development")
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Go application built with OpenShift S2I",
///   "application": "s2i-go-demo",
///   "environment": "development"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Application information", body = AppInfoResponse)
    ),
    tag = "Info"
)]
pub async fn info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(AppInfoResponse::new(&state.environment))
}

/// # Route Configuration
///
/// Registers the info endpoint at exactly `/api/info`, accepting any HTTP
/// method.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/api/info", web::route().to(info));
}
