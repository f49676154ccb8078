use std::env;

/// # Application Configuration
///
/// All environment-driven settings, read once at startup and passed to the
/// server constructor so handlers never touch the environment themselves.
///
/// ## Variables
/// - `PORT`: TCP port to listen on (default `"8080"` when unset or empty)
/// - `ENVIRONMENT`: deployment label echoed by `/api/info` (default
///   `"development"` when unset or empty)
///
/// The port is kept as a string: an unparsable value flows into the bind
/// address and fails the bind, which is the service's one fatal error.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: String,
    pub environment: String,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("PORT").ok(), env::var("ENVIRONMENT").ok())
    }

    /// Builds a configuration from raw variable values, applying defaults
    /// for missing or empty values. Split out so tests can exercise the
    /// default rules without mutating the process environment.
    pub fn from_vars(port: Option<String>, environment: Option<String>) -> Self {
        Self {
            port: or_default(port, "8080"),
            environment: or_default(environment, "development"),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_vars(None, None);
        assert_eq!(config.port, "8080");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = AppConfig::from_vars(Some(String::new()), Some(String::new()));
        assert_eq!(config.port, "8080");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_explicit_values_are_kept() {
        let config = AppConfig::from_vars(Some("9090".to_string()), Some("staging".to_string()));
        assert_eq!(config.port, "9090");
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_addr_formatting() {
        let config = AppConfig::from_vars(Some("9090".to_string()), None);
        assert_eq!(config.addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_addr_default() {
        assert_eq!(AppConfig::default().addr(), "0.0.0.0:8080");
    }
}
