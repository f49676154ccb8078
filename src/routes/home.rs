use actix_web::{HttpResponse, Responder, web};

// Fixed display text; nothing is interpolated into this page.
const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Go S2I Application</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .container {
            background-color: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        h1 {
            color: #333;
        }
        .endpoints {
            background-color: #f9f9f9;
            padding: 15px;
            border-radius: 5px;
            margin-top: 20px;
        }
        .endpoint {
            margin: 10px 0;
        }
        a {
            color: #0066cc;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
        .success {
            color: #28a745;
            font-weight: bold;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>🚀 Go Application Running Successfully!</h1>
        <p class="success">✓ Your OpenShift S2I Go Pipeline deployment is working!</p>

        <h2>Available Endpoints:</h2>
        <div class="endpoints">
            <div class="endpoint">
                <strong>🏠 Home:</strong> <a href="/">/</a> - This page
            </div>
            <div class="endpoint">
                <strong>💚 Health:</strong> <a href="/health">/health</a> - Health check endpoint (JSON)
            </div>
            <div class="endpoint">
                <strong>✅ Ready:</strong> <a href="/ready">/ready</a> - Readiness probe endpoint (JSON)
            </div>
            <div class="endpoint">
                <strong>📊 Info:</strong> <a href="/api/info">/api/info</a> - Application information (JSON)
            </div>
        </div>

        <h2>About This Application:</h2>
        <p>This is a Go application built and deployed using:</p>
        <ul>
            <li>OpenShift Pipelines (Tekton)</li>
            <li>Source-to-Image (S2I) with s2i-go ClusterTask</li>
            <li>Standard Go HTTP server</li>
        </ul>
    </div>
</body>
</html>
"#;

/// # Landing Page Endpoint
///
/// Serves the fixed HTML page describing the running service.
///
/// ## Response
///
/// - **200 OK**: Page is served
///   - Content-Type: `text/html; charset=utf-8`
///   - Body: static HTML listing the four endpoints
pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(HOME_PAGE)
}

/// # Route Configuration
///
/// Registers the landing page at exactly `/`, accepting any HTTP method.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/", web::route().to(home));
}
