use actix_web::{App, HttpServer, web::Data};
use s2i_demo::config::AppConfig;
use s2i_demo::openapi::ApiDoc;
use s2i_demo::state::AppState;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// S2I Demo Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Static landing page, health, readiness and info endpoints
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Shared application state carrying the server start time
///
/// # Endpoints
/// - Home: `/`
/// - Health check: `/health`
/// - Readiness probe: `/ready`
/// - Application info: `/api/info`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - `PORT` selects the listen port (default `8080`)
/// - `ENVIRONMENT` labels the deployment (default `development`)
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let state = Data::new(AppState::new(&config));

    tracing::info!("Starting server on port {}...", config.port);
    tracing::info!("Endpoints available:");
    for path in ["/", "/health", "/ready", "/api/info"] {
        tracing::info!("  - http://localhost:{}{}", config.port, path);
    }

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(state.clone())
            .configure(s2i_demo::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(config.addr())?
    .run()
    .await
}
