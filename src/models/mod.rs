/// # Health & Readiness Responses
///
/// Response entities for the `/health` and `/ready` probe endpoints, plus
/// the Go-style uptime duration formatting used by the health payload.
pub mod health;

/// # Application Info Response
///
/// Response entity for `/api/info`, reflecting the configured deployment
/// environment.
pub mod info;

pub use health::{HealthResponse, ReadinessResponse};
pub use info::AppInfoResponse;
