use std::time::{Duration, Instant};

use crate::config::AppConfig;

/// # Shared Application State
///
/// Read-only values shared across all request handlers via `web::Data`.
/// Captured once at startup and never mutated, so no synchronization is
/// needed beyond the `Arc` that `web::Data` already provides.
///
/// ## Fields
/// - `started_at`: monotonic instant captured when the server was built,
///   read by the health handler to report uptime
/// - `environment`: deployment label echoed by `/api/info`
#[derive(Debug, Clone)]
pub struct AppState {
    started_at: Instant,
    pub environment: String,
}

impl AppState {
    /// Captures the start instant now and copies the environment label out
    /// of the loaded configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            started_at: Instant::now(),
            environment: config.environment.clone(),
        }
    }

    /// Elapsed wall-clock time since the server started. Backed by a
    /// monotonic clock, so successive calls never go backwards.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_copies_environment_from_config() {
        let config = AppConfig::from_vars(None, Some("staging".to_string()));
        let state = AppState::new(&config);
        assert_eq!(state.environment, "staging");
    }

    #[test]
    fn test_uptime_is_monotonic() {
        let state = AppState::new(&AppConfig::default());
        let first = state.uptime();
        let second = state.uptime();
        assert!(second >= first);
    }
}
