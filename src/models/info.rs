use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Application Info Response
///
/// Reported by `/api/info`. Everything except `environment` is fixed
/// display text describing the deployed application.
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Go application built with OpenShift S2I",
///   "application": "s2i-go-demo",
///   "environment": "development"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct AppInfoResponse {
    pub message: String,
    pub application: String,
    pub environment: String,
}

impl AppInfoResponse {
    pub fn new(environment: &str) -> Self {
        Self {
            message: "Go application built with OpenShift S2I".to_string(),
            application: "s2i-go-demo".to_string(),
            environment: environment.to_string(),
        }
    }
}
