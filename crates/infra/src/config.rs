//! Process configuration, loaded from environment variables with
//! documented defaults. No config file support: every deployment of this
//! fabric is a container with env vars injected by its orchestrator.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),
    #[error("invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// One collaborator service's base URL and request timeout.
#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client_service: ServiceEndpoint,
    pub catalog_service: ServiceEndpoint,
    pub inventory_service: ServiceEndpoint,

    pub queue_url: String,
    pub queue_poll_max: u32,
    pub queue_poll_wait_seconds: u32,
    pub queue_endpoint_url: Option<String>,

    pub evidence_bucket: String,

    pub realtime_env_prefix: String,
    pub realtime_api_key: String,

    pub route_avg_speed_kph: f64,
    pub route_stop_minutes: u32,
}

const DEFAULT_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_QUEUE_POLL_MAX: u32 = 10;
const DEFAULT_QUEUE_POLL_WAIT_SECONDS: u32 = 20;
const DEFAULT_ROUTE_AVG_SPEED_KPH: f64 = 30.0;
const DEFAULT_ROUTE_STOP_MINUTES: u32 = 5;

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_service: service_endpoint("CLIENT_SERVICE")?,
            catalog_service: service_endpoint("CATALOG_SERVICE")?,
            inventory_service: service_endpoint("INVENTORY_SERVICE")?,

            queue_url: required_var("QUEUE_URL")?,
            queue_poll_max: optional_parsed("QUEUE_POLL_MAX", DEFAULT_QUEUE_POLL_MAX)?,
            queue_poll_wait_seconds: optional_parsed("QUEUE_POLL_WAIT_SECONDS", DEFAULT_QUEUE_POLL_WAIT_SECONDS)?,
            queue_endpoint_url: std::env::var("QUEUE_ENDPOINT_URL").ok(),

            evidence_bucket: required_var("EVIDENCE_BUCKET")?,

            realtime_env_prefix: std::env::var("REALTIME_ENV_PREFIX").unwrap_or_else(|_| "dev".to_string()),
            realtime_api_key: std::env::var("REALTIME_API_KEY").unwrap_or_default(),

            route_avg_speed_kph: optional_parsed("ROUTE_AVG_SPEED_KPH", DEFAULT_ROUTE_AVG_SPEED_KPH)?,
            route_stop_minutes: optional_parsed("ROUTE_STOP_MINUTES", DEFAULT_ROUTE_STOP_MINUTES)?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue(name.to_string(), raw)),
        Err(_) => Ok(default),
    }
}

fn service_endpoint(prefix: &str) -> Result<ServiceEndpoint, ConfigError> {
    let base_url = required_var(&format!("{prefix}_URL"))?;
    let timeout_ms = optional_parsed(&format!("{prefix}_TIMEOUT_MS"), DEFAULT_TIMEOUT_MS)?;
    Ok(ServiceEndpoint {
        base_url,
        timeout: Duration::from_millis(timeout_ms),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap();
        for (k, v) in vars {
            std::env::set_var(k, v);
        }
        f();
        for (k, _) in vars {
            std::env::remove_var(k);
        }
    }

    #[test]
    fn missing_required_var_is_reported_by_name() {
        with_env(&[], || {
            let err = AppConfig::from_env().unwrap_err();
            assert_eq!(err, ConfigError::MissingVar("CLIENT_SERVICE_URL".to_string()));
        });
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_absent() {
        with_env(
            &[
                ("CLIENT_SERVICE_URL", "http://clients"),
                ("CATALOG_SERVICE_URL", "http://catalog"),
                ("INVENTORY_SERVICE_URL", "http://inventory"),
                ("QUEUE_URL", "http://queue"),
                ("EVIDENCE_BUCKET", "evidence"),
            ],
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config.queue_poll_max, DEFAULT_QUEUE_POLL_MAX);
                assert_eq!(config.queue_poll_wait_seconds, DEFAULT_QUEUE_POLL_WAIT_SECONDS);
                assert_eq!(config.route_avg_speed_kph, DEFAULT_ROUTE_AVG_SPEED_KPH);
                assert_eq!(config.route_stop_minutes, DEFAULT_ROUTE_STOP_MINUTES);
                assert_eq!(config.realtime_env_prefix, "dev");
                assert_eq!(config.client_service.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
            },
        );
    }

    #[test]
    fn invalid_numeric_value_is_reported_by_name() {
        with_env(
            &[
                ("CLIENT_SERVICE_URL", "http://clients"),
                ("CATALOG_SERVICE_URL", "http://catalog"),
                ("INVENTORY_SERVICE_URL", "http://inventory"),
                ("QUEUE_URL", "http://queue"),
                ("EVIDENCE_BUCKET", "evidence"),
                ("QUEUE_POLL_MAX", "not-a-number"),
            ],
            || {
                let err = AppConfig::from_env().unwrap_err();
                assert_eq!(err, ConfigError::InvalidValue("QUEUE_POLL_MAX".to_string(), "not-a-number".to_string()));
            },
        );
    }
}
