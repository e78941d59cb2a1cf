//! Configuration loading from the environment.

use std::time::Duration;
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_MONGO_URI: &str = "MONGO_URI";
pub const ENV_POSTGRES_URI: &str = "POSTGRES_URI";
pub const ENV_STARTUP_DELAY_SECS: &str = "STARTUP_DELAY_SECS";
pub const ENV_SLOW_DELAY_SECS: &str = "SLOW_DELAY_SECS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a whole number of seconds, got {value:?}")]
    InvalidSeconds { key: &'static str, value: String },

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the process environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load and validate configuration from an arbitrary variable lookup.
///
/// Unset variables keep their defaults.
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = AppConfig::default();

    if let Some(uri) = lookup(ENV_MONGO_URI) {
        config.datastores.mongo_uri = uri;
    }
    if let Some(uri) = lookup(ENV_POSTGRES_URI) {
        config.datastores.postgres_uri = uri;
    }
    if let Some(raw) = lookup(ENV_STARTUP_DELAY_SECS) {
        config.startup.delay = parse_seconds(ENV_STARTUP_DELAY_SECS, &raw)?;
    }
    if let Some(raw) = lookup(ENV_SLOW_DELAY_SECS) {
        config.endpoints.slow_delay = parse_seconds(ENV_SLOW_DELAY_SECS, &raw)?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_seconds(key: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidSeconds {
            key,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{
        DEFAULT_MONGO_URI, DEFAULT_POSTGRES_URI, DEFAULT_SLOW_DELAY, DEFAULT_STARTUP_DELAY,
    };
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load_config_from(env(&[])).unwrap();
        assert_eq!(config.datastores.mongo_uri, DEFAULT_MONGO_URI);
        assert_eq!(config.startup.delay, DEFAULT_STARTUP_DELAY);
        assert_eq!(config.endpoints.slow_delay, DEFAULT_SLOW_DELAY);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_env_overrides() {
        let config = load_config_from(env(&[
            (ENV_MONGO_URI, "mongodb://db:27017"),
            (ENV_POSTGRES_URI, "postgres://u:p@db/app"),
            (ENV_STARTUP_DELAY_SECS, "0"),
            (ENV_SLOW_DELAY_SECS, " 3 "),
        ]))
        .unwrap();

        assert_eq!(config.datastores.mongo_uri, "mongodb://db:27017");
        assert_eq!(config.datastores.postgres_uri, "postgres://u:p@db/app");
        assert_eq!(config.startup.delay, Duration::ZERO);
        assert_eq!(config.endpoints.slow_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_bad_seconds_rejected() {
        let err = load_config_from(env(&[(ENV_SLOW_DELAY_SECS, "soon")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSeconds { key: ENV_SLOW_DELAY_SECS, .. }
        ));
        assert!(err.to_string().contains("soon"));
    }

    #[test]
    fn test_empty_uri_is_accepted() {
        let config = load_config_from(env(&[(ENV_MONGO_URI, "")])).unwrap();
        assert_eq!(config.datastores.mongo_uri, "");
        assert_eq!(config.datastores.postgres_uri, DEFAULT_POSTGRES_URI);
    }

    #[test]
    fn test_bad_external_url_fails_validation() {
        let mut config = AppConfig::default();
        config.endpoints.external_url = "ftp://example.com".into();
        let err = validate_config(&config).map_err(ConfigError::Validation).unwrap_err();
        assert!(err.to_string().starts_with("Validation failed: "));
    }
}
