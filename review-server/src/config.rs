//! Environment-driven server configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds, enforced by [`tower_http::timeout::TimeoutLayer`].
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in bytes, enforced by
    /// [`tower_http::limit::RequestBodyLimitLayer`].
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Minimum similarity a `replace` edit's proposed text must reach
    /// against its clause before it is flagged as drifted.
    #[serde(default = "default_drift_min_similarity")]
    pub drift_min_similarity: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_bytes: default_max_body_bytes(),
            log_level: default_log_level(),
            drift_min_similarity: default_drift_min_similarity(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the environment,
    /// falling back to the defaults above for anything unset.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .set_default("host", default_host())?
            .set_default("port", default_port() as i64)?
            .set_default("timeout_secs", default_timeout_secs() as i64)?
            .set_default("max_body_bytes", default_max_body_bytes() as i64)?
            .set_default("log_level", default_log_level())?
            .set_default("drift_min_similarity", default_drift_min_similarity())?
            .add_source(config::Environment::with_prefix("REVIEW_SERVER").separator("__"));

        builder.build()?.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_drift_min_similarity() -> f64 {
    review_core::align::DEFAULT_DRIFT_MIN_SIMILARITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.socket_addr().is_ok());
    }
}
