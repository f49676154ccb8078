use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Version string advertised by `/health`. Fixed display value, independent
/// of the crate version.
pub const VERSION: &str = "1.0.0";

/// # Health Status Response
///
/// Represents the operational status of the service, reported by the
/// `/health` liveness probe.
///
/// ## Fields
/// - `status`: always `"healthy"` (the handler has no failure path)
/// - `timestamp`: ISO 8601 / RFC 3339 timestamp of the check
/// - `version`: advertised application version
/// - `uptime`: elapsed time since server start, rounded to seconds and
///   rendered as a duration string such as `"5s"` or `"1m30s"`
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "version": "1.0.0",
///   "uptime": "1m30s"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    pub fn healthy(uptime: Duration) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: VERSION.to_string(),
            uptime: format_uptime(uptime),
        }
    }
}

/// # Readiness Status Response
///
/// Reported by the `/ready` readiness probe. Carries a map of named checks;
/// the only check today is the server itself, which is trivially `"ok"`
/// whenever the process can answer at all.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HashMap<String, String>,
}

impl ReadinessResponse {
    pub fn ready() -> Self {
        Self {
            status: "ready".to_string(),
            checks: HashMap::from([("server".to_string(), "ok".to_string())]),
        }
    }
}

/// Renders a duration the way Go's `time.Duration.String()` does after
/// rounding to the nearest second: zero-valued leading units are omitted,
/// but once a larger unit is printed, smaller units print even when zero.
///
/// Examples: `"0s"`, `"5s"`, `"1m30s"`, `"1h0m5s"`.
pub fn format_uptime(uptime: Duration) -> String {
    let total = round_to_secs(uptime);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

// Half-up rounding, matching Go's Duration.Round(time.Second) for positive
// durations.
fn round_to_secs(d: Duration) -> u64 {
    let secs = d.as_secs();
    if d.subsec_nanos() >= 500_000_000 {
        secs + 1
    } else {
        secs
    }
}
